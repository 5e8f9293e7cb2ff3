// src/templates/components/shoe_card.rs

use crate::domain::{Shoe, Variant};
use crate::format::{format_price, pluralize};
use crate::templates::components::spacer::spacer;
use crate::theme::Theme;
use maud::{html, Markup};

const ROW_CSS: &str =
    "font-size: 1rem; display: flex; justify-content: space-between; align-items: baseline;";

/// Badge overlaid on the top-right corner of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    pub label: &'static str,
    pub background: &'static str,
}

/// Everything about a card that depends on its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    pub flag: Option<Flag>,
    /// `None` inherits the surrounding text color.
    pub price_color: Option<&'static str>,
    pub price_decoration: Option<&'static str>,
    pub shows_sale_price: bool,
}

impl VariantStyle {
    pub fn for_variant(variant: Variant, theme: &Theme) -> Self {
        let colors = &theme.colors;
        match variant {
            Variant::OnSale => Self {
                flag: Some(Flag {
                    label: "Sale",
                    background: colors.primary,
                }),
                price_color: Some(colors.gray_700),
                price_decoration: Some("line-through"),
                shows_sale_price: true,
            },
            Variant::NewRelease => Self {
                flag: Some(Flag {
                    label: "Just released!",
                    background: colors.secondary,
                }),
                price_color: None,
                price_decoration: None,
                shows_sale_price: false,
            },
            Variant::Default => Self {
                flag: None,
                price_color: None,
                price_decoration: None,
                shows_sale_price: false,
            },
        }
    }
}

/// Link target for a shoe's detail page.
pub fn shoe_href(slug: &str) -> String {
    format!("/shoe/{slug}")
}

fn flag_css(flag: Flag, theme: &Theme) -> String {
    format!(
        "position: absolute; top: 12px; right: -4px; font-weight: 700; color: {}; \
         padding: 0 10px; border-radius: 2px; height: 32px; line-height: 32px; \
         font-size: 0.875rem; background-color: {};",
        theme.colors.white, flag.background
    )
}

fn price_css(style: &VariantStyle, theme: &Theme) -> String {
    let mut css = format!("font-weight: {};", theme.weights.normal);
    if let Some(color) = style.price_color {
        css.push_str(&format!(" color: {color};"));
    }
    if let Some(decoration) = style.price_decoration {
        css.push_str(&format!(" text-decoration-line: {decoration};"));
    }
    css
}

/// Renders one shoe card. `variant` comes from [`Variant::for_shoe`].
pub fn shoe_card(shoe: &Shoe, variant: Variant, theme: &Theme) -> Markup {
    let style = VariantStyle::for_variant(variant, theme);
    let sale_price = shoe.sale_price.filter(|_| style.shows_sale_price);

    html! {
        a class="shoe-card" href=(shoe_href(&shoe.slug)) style="text-decoration: none; color: inherit;" {
            article data-variant=(variant.as_str()) {
                div class="shoe-card__image" style="position: relative;" {
                    img alt="" src=(shoe.image_src) style="width: 100%; border-radius: 16px 16px 4px 4px;";
                    @if let Some(flag) = style.flag {
                        span class="shoe-card__flag" style=(flag_css(flag, theme)) { (flag.label) }
                    }
                }
                (spacer(12))
                div class="shoe-card__row" style=(ROW_CSS) {
                    h3 style=(format!("font-weight: {}; color: {};", theme.weights.medium, theme.colors.gray_900)) {
                        (shoe.name)
                    }
                    span class="shoe-card__price" style=(price_css(&style, theme)) {
                        (format_price(shoe.price))
                    }
                }
                div class="shoe-card__row" style=(ROW_CSS) {
                    p style=(format!("color: {};", theme.colors.gray_700)) {
                        (pluralize("Color", shoe.num_of_colors))
                    }
                    @if let Some(sale) = sale_price {
                        span
                            class="shoe-card__sale-price"
                            style=(format!("font-weight: {}; color: {};", theme.weights.medium, theme.colors.primary))
                        {
                            (format_price(sale))
                        }
                    }
                }
            }
        }
    }
}
