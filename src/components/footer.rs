use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_core::PROFILE;

/// Footer line for a given year
pub fn footer_line(year: i32, name: &str) -> String {
    format!("© {year} {name} • System_Online")
}

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();
    let line = footer_line(year, PROFILE.name);

    rsx! {
        footer { class: "site-footer",
            p { "{line}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_carries_year_and_name() {
        assert_eq!(
            footer_line(2026, "Manvanth Gowda M"),
            "© 2026 Manvanth Gowda M • System_Online"
        );
    }
}
