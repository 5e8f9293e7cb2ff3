// src/theme.rs

/// Named colors shared by every template.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub white: &'static str,
    pub gray_100: &'static str,
    pub gray_300: &'static str,
    pub gray_500: &'static str,
    pub gray_700: &'static str,
    pub gray_900: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FontWeights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

/// Design tokens, passed by reference into the components that need them.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colors: Palette,
    pub weights: FontWeights,
}

pub const THEME: Theme = Theme {
    colors: Palette {
        white: "hsl(0deg 0% 100%)",
        gray_100: "hsl(185deg 5% 95%)",
        gray_300: "hsl(190deg 5% 80%)",
        gray_500: "hsl(196deg 4% 60%)",
        gray_700: "hsl(220deg 5% 40%)",
        gray_900: "hsl(220deg 3% 20%)",
        primary: "hsl(340deg 65% 47%)",
        secondary: "hsl(240deg 60% 63%)",
    },
    weights: FontWeights {
        normal: 500,
        medium: 600,
        bold: 800,
    },
};
