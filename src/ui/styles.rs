use {
    crate::{ui::UI_CONFIG, utils::ChangeClass},
    eframe::egui::{Color32, RichText, Ui},
};

pub trait ChangeColor {
    fn color(&self) -> Color32;
}

impl ChangeColor for ChangeClass {
    fn color(&self) -> Color32 {
        match self {
            Self::Positive => UI_CONFIG.colors.positive,
            Self::Negative => UI_CONFIG.colors.negative,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_error(&mut self, text: impl Into<String>);
    fn button_text_primary(&self, text: impl Into<String>) -> RichText;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).strong().color(UI_CONFIG.colors.error));
    }

    fn button_text_primary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(Color32::WHITE)
    }
}
