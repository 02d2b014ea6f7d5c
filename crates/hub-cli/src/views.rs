//! Screens rendered after an operation decides where to go next.

use hub_core::{LoginForm, RegisterForm, Tech, TechStatus, User, ValidationErrors};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::components::{Input, Navbar, Select};
use crate::output::{output, render_array_table};

const STATUS_LABELS: [&str; 3] = [
    TechStatus::Beginner.as_str(),
    TechStatus::Intermediate.as_str(),
    TechStatus::Advanced.as_str(),
];

#[derive(Serialize)]
struct DashboardResponse<'a> {
    user: &'a User,
    techs: &'a [Tech],
}

#[derive(Serialize)]
struct LandingResponse<'a> {
    authenticated: bool,
    notice: Option<&'a str>,
}

/// Landing view: how to log in or register.
#[must_use]
pub fn landing(notice: Option<&str>) -> String {
    let mut lines = vec![Navbar::Plain.render(), String::new()];
    if let Some(notice) = notice {
        lines.push(notice.to_string());
        lines.push(String::new());
    }
    lines.push("Log in:    techhub auth login --email <EMAIL> --password <PASSWORD>".into());
    lines.push("New here?  techhub auth register --help".into());
    lines.join("\n")
}

/// Dashboard view: greeting, course module and the technology list.
#[must_use]
pub fn dashboard(user: &User, techs: &[Tech]) -> String {
    let mut lines = vec![
        Navbar::Logout.render(),
        String::new(),
        format!("Hello, {}", user.name),
        user.course_module.clone(),
        String::new(),
        String::from("Technologies"),
    ];

    let rows = techs
        .iter()
        .map(|tech| {
            serde_json::json!({
                "title": tech.title,
                "status": tech.status.as_str(),
                "id": tech.id,
            })
        })
        .collect::<Vec<Value>>();
    lines.push(render_array_table(&rows, &["title", "status", "id"]));
    lines.join("\n")
}

pub fn show_landing(notice: Option<&str>, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        println!("{}", landing(notice));
        Ok(())
    } else {
        output(
            &LandingResponse {
                authenticated: false,
                notice,
            },
            flags.format,
        )
    }
}

pub fn show_dashboard(user: &User, techs: &[Tech], flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        println!("{}", dashboard(user, techs));
        Ok(())
    } else {
        output(&DashboardResponse { user, techs }, flags.format)
    }
}

fn field_error<'a>(errors: &'a ValidationErrors, field: &str) -> Option<&'a str> {
    errors.for_field(field).map(|error| error.message.as_str())
}

fn status_selection(raw: &str) -> Option<&'static str> {
    raw.parse::<TechStatus>().ok().map(TechStatus::as_str)
}

#[must_use]
pub fn login_form(form: &LoginForm, errors: &ValidationErrors) -> String {
    [
        Navbar::Plain.render(),
        String::new(),
        Input::new("Email", &form.email)
            .error(field_error(errors, "email"))
            .render(),
        Input::new("Password", &form.password)
            .masked()
            .error(field_error(errors, "password"))
            .render(),
    ]
    .join("\n")
}

#[must_use]
pub fn register_form(form: &RegisterForm, errors: &ValidationErrors) -> String {
    [
        Navbar::Back.render(),
        String::new(),
        Input::new("Name", &form.name)
            .error(field_error(errors, "name"))
            .render(),
        Input::new("Email", &form.email)
            .error(field_error(errors, "email"))
            .render(),
        Input::new("Password", &form.password)
            .masked()
            .error(field_error(errors, "password"))
            .render(),
        Input::new("Confirm password", &form.confirm_password)
            .masked()
            .error(field_error(errors, "confirm_password"))
            .render(),
        Input::new("Bio", &form.bio)
            .error(field_error(errors, "bio"))
            .render(),
        Input::new("Contact", &form.contact)
            .error(field_error(errors, "contact"))
            .render(),
        Input::new("Course module", &form.course_module)
            .error(field_error(errors, "course_module"))
            .render(),
    ]
    .join("\n")
}

/// Add-technology dialog with the raw input the user typed.
#[must_use]
pub fn add_tech_form(title: &str, status: &str, errors: &ValidationErrors) -> String {
    [
        String::from("Register technology"),
        Input::new("Title", title)
            .error(field_error(errors, "title"))
            .render(),
        Select::new("Status", &STATUS_LABELS, status_selection(status))
            .error(field_error(errors, "status"))
            .render(),
    ]
    .join("\n")
}

/// Edit dialog for the technology `tech_id` with the status the user typed.
#[must_use]
pub fn edit_tech_form(tech_id: &str, status: &str, errors: &ValidationErrors) -> String {
    [
        String::from("Technology details"),
        Input::new("Id", tech_id).render(),
        Select::new("Status", &STATUS_LABELS, status_selection(status))
            .error(field_error(errors, "status"))
            .render(),
    ]
    .join("\n")
}
