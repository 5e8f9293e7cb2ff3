use crate::theme::Theme;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, theme: &Theme, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Sole&Ankle" }
                link rel="stylesheet" href="/static/main.css";
            }
            body style=(format!("margin: 0; font-family: system-ui, sans-serif; color: {};", theme.colors.gray_900)) {
                header
                    style=(format!("display: flex; align-items: baseline; gap: 32px; padding: 18px 32px; border-bottom: 1px solid {};", theme.colors.gray_300))
                {
                    a href="/" style="text-decoration: none; color: inherit;" {
                        h1 style="font-size: 1.5rem; margin: 0;" { "Sole&Ankle" }
                    }
                    nav {
                        a href="/?sort=newest" style="color: inherit; margin-right: 24px;" { "New Releases" }
                        a href="/?sort=price" style="color: inherit;" { "Shop by Price" }
                    }
                }
                main style="padding: 32px;" {
                    (content)
                }
            }
        }
    }
}
