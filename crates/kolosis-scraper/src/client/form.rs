use reqwest::{Method, Url};
use scraper::ElementRef;

use super::Page;
use crate::html::selector;

/// An HTML form lifted out of a page, ready to be filled in and submitted.
///
/// Carries every named control the browser would send (hidden tokens
/// included) plus the first named submit button, mirroring a click on it.
#[derive(Debug, Clone)]
pub struct HtmlForm {
    action: Url,
    method: Method,
    fields: Vec<(String, String)>,
}

impl HtmlForm {
    /// Finds the form whose `action` attribute equals `action` exactly.
    ///
    /// Returns `None` when no such form exists or its action cannot be
    /// resolved against the page URL.
    #[must_use]
    pub fn find(page: &Page, action: &str) -> Option<Self> {
        let document = page.document();
        let form_sel = selector("form[action]");
        let form = document
            .select(&form_sel)
            .find(|f| f.value().attr("action") == Some(action))?;

        let action = page.join(action)?;
        let method = match form.value().attr("method") {
            Some(m) if m.eq_ignore_ascii_case("post") => Method::POST,
            _ => Method::GET,
        };

        Some(Self {
            action,
            method,
            fields: collect_fields(form),
        })
    }

    #[must_use]
    pub fn action(&self) -> &Url {
        &self.action
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `name` to `value`, replacing an existing control's value or
    /// appending a new one.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => value.clone_into(&mut slot.1),
            None => self.fields.push((name.to_owned(), value.to_owned())),
        }
    }
}

fn collect_fields(form: ElementRef<'_>) -> Vec<(String, String)> {
    let control_sel = selector("input[name], select[name], textarea[name], button[name]");
    let option_sel = selector("option");

    let mut fields = Vec::new();
    let mut submit_taken = false;

    for control in form.select(&control_sel) {
        let el = control.value();
        let Some(name) = el.attr("name") else {
            continue;
        };
        let kind = el.attr("type").unwrap_or("").to_ascii_lowercase();

        let value = match el.name() {
            "select" => control
                .select(&option_sel)
                .find(|o| o.value().attr("selected").is_some())
                .or_else(|| control.select(&option_sel).next())
                .map(|o| {
                    o.value()
                        .attr("value")
                        .map_or_else(|| o.text().collect::<String>(), str::to_owned)
                }),
            "textarea" => Some(control.text().collect::<String>()),
            "button" => {
                if kind.is_empty() || kind == "submit" {
                    submit_value(&mut submit_taken, el.attr("value"))
                } else {
                    None
                }
            }
            _ => match kind.as_str() {
                "submit" | "image" => submit_value(&mut submit_taken, el.attr("value")),
                "reset" | "button" | "file" => None,
                "checkbox" | "radio" => el
                    .attr("checked")
                    .map(|_| el.attr("value").unwrap_or("on").to_owned()),
                _ => Some(el.attr("value").unwrap_or("").to_owned()),
            },
        };

        if let Some(value) = value {
            fields.push((name.to_owned(), value));
        }
    }

    fields
}

/// Only the first submit button counts as clicked.
fn submit_value(taken: &mut bool, value: Option<&str>) -> Option<String> {
    if *taken {
        return None;
    }
    *taken = true;
    Some(value.unwrap_or("").to_owned())
}
