use maud::{html, Markup};

/// Empty square block of `size` px.
pub fn spacer(size: u32) -> Markup {
    let css = format!(
        "display: block; width: {size}px; min-width: {size}px; height: {size}px; min-height: {size}px;"
    );

    html! {
        span class="spacer" style=(css) {}
    }
}
