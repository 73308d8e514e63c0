//! The document root element's class list.

use super::{PresentationTarget, TargetError};
use crate::theme::Theme;

/// Theme flags applied as classes on `<html>`.
///
/// Stylesheets using class-based dark mode select on `html.dark`.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: Option<web_sys::Element>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        Self { root }
    }

    fn class_list(&self) -> Result<web_sys::DomTokenList, TargetError> {
        self.root
            .as_ref()
            .map(|el| el.class_list())
            .ok_or(TargetError::Unavailable)
    }
}

impl Default for DocumentRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationTarget for DocumentRoot {
    fn clear_indicators(&mut self) -> Result<(), TargetError> {
        self.class_list()?
            .remove_2(Theme::Light.as_str(), Theme::Dark.as_str())
            .map_err(dom_error)
    }

    fn apply_indicator(&mut self, theme: Theme) -> Result<(), TargetError> {
        self.class_list()?.add_1(theme.as_str()).map_err(dom_error)
    }
}

fn dom_error(value: wasm_bindgen::JsValue) -> TargetError {
    TargetError::Dom(format!("{value:?}"))
}
