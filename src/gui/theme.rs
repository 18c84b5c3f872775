use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

/// Single dark palette for the app. Accent accessors are what the panels
/// use; the raw fields only feed `set_theme`.
#[derive(Clone)]
pub struct Theme {
    background: Color32,
    background_dark: Color32,
    background_light: Color32,
    foreground: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    yellow: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    pub fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            yellow: Color32::from_rgb(0xf1, 0xfa, 0x8c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
        }
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.purple).strong()
    }

    pub fn bold(&self, content: &str) -> RichText {
        RichText::new(content).color(self.orange)
    }

    pub fn weak_color(&self) -> Color32 {
        self.comment
    }

    pub fn red(&self) -> Color32 {
        self.red
    }

    pub fn orange(&self) -> Color32 {
        self.orange
    }

    pub fn yellow(&self) -> Color32 {
        self.yellow
    }

    pub fn green(&self) -> Color32 {
        self.green
    }

    pub fn purple(&self) -> Color32 {
        self.purple
    }

    pub fn cyan(&self) -> Color32 {
        self.cyan
    }

    pub fn card_fill(&self) -> Color32 {
        self.background_dark
    }

    pub fn difficulty_color(&self, label: &str) -> Color32 {
        match label {
            "Low" => self.green,
            "High" => self.red,
            _ => self.yellow,
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    let default = Visuals::dark();

    let mut visuals = Visuals {
        dark_mode: true,
        panel_fill: theme.background,
        window_fill: theme.background_dark,
        extreme_bg_color: theme.background_dark,
        hyperlink_color: theme.cyan,
        warn_fg_color: theme.orange,
        error_fg_color: theme.red,
        ..default
    };

    visuals.widgets.noninteractive.bg_fill = theme.background;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, theme.foreground);
    visuals.widgets.inactive.bg_fill = theme.background_light;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, theme.foreground);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, theme.foreground);
    visuals.widgets.active.bg_fill = theme.background_light;
    visuals.selection.bg_fill = theme.purple.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, theme.purple);

    ctx.set_visuals(visuals);
}
