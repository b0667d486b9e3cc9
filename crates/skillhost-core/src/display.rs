// crates/skillhost-core/src/display.rs
// ============================================================================
// Module: Skillhost Display Directives
// Description: Render-template directive and its image/text records.
// Purpose: Render text and images on screened devices.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The display interface renders body templates (static text and images) or
//! list templates (scrollable items) on devices with a screen. Image records
//! are shared with the audio player presentation metadata.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Render Template Directive
// ============================================================================

/// Renders a body or list template on a screened device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayRenderTemplateDirective {
    /// Template to render.
    pub template: DisplayTemplate,
}

impl DisplayRenderTemplateDirective {
    /// Creates a render directive for the given template type
    /// (for example `BodyTemplate1`, `ListTemplate1`).
    #[must_use]
    pub fn new(template_type: impl Into<String>) -> Self {
        Self {
            template: DisplayTemplate {
                template_type: template_type.into(),
                ..DisplayTemplate::default()
            },
        }
    }
}

/// Body or list template displayed on the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTemplate {
    /// Template type (`BodyTemplate*` or `ListTemplate*`).
    #[serde(rename = "type")]
    pub template_type: String,
    /// Opaque token identifying the rendered view.
    #[serde(default)]
    pub token: String,
    /// Back button state (`VISIBLE` or `HIDDEN`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub back_button: String,
    /// Background image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<DisplayImage>,
    /// Template title.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Text fields of the template.
    #[serde(default)]
    pub text_content: DisplayTextContent,
    /// Items of a list template.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_items: Vec<DisplayListItem>,
}

/// Primary, secondary, and tertiary text of a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTextContent {
    /// Primary text field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_text: Option<DisplayText>,
    /// Secondary text field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<DisplayText>,
    /// Tertiary text field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary_text: Option<DisplayText>,
}

/// One text field with its rendering mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayText {
    /// Rendering mode (`PlainText` or `RichText`).
    #[serde(rename = "type")]
    pub text_type: String,
    /// Text to display.
    pub text: String,
}

/// One item of a list template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayListItem {
    /// Opaque token identifying the item.
    #[serde(default)]
    pub token: String,
    /// Item image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<DisplayImage>,
    /// Item text fields.
    #[serde(default)]
    pub text_content: DisplayTextContent,
}

// ============================================================================
// SECTION: Image Records
// ============================================================================

/// Image reference with one or more renditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayImage {
    /// Accessibility description of the image.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_description: String,
    /// Available renditions of the image.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<ImageSource>,
}

impl DisplayImage {
    /// Creates an image with the given accessibility description.
    #[must_use]
    pub fn new(content_description: impl Into<String>) -> Self {
        Self {
            content_description: content_description.into(),
            sources: Vec::new(),
        }
    }

    /// Adds a rendition of the image.
    #[must_use]
    pub fn with_source(
        mut self,
        size: impl Into<String>,
        url: impl Into<String>,
        width_pixels: i64,
        height_pixels: i64,
    ) -> Self {
        self.sources.push(ImageSource {
            url: url.into(),
            size: size.into(),
            width_pixels,
            height_pixels,
        });
        self
    }
}

/// One rendition of an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    /// Rendition URL.
    pub url: String,
    /// Size class (for example `SMALL`, `LARGE`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub size: String,
    /// Width in pixels; zero when unspecified.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub width_pixels: i64,
    /// Height in pixels; zero when unspecified.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub height_pixels: i64,
}

/// Returns true for zero pixel dimensions left unspecified.
#[allow(clippy::trivially_copy_pass_by_ref, reason = "serde skip predicates take references.")]
fn is_zero(value: &i64) -> bool {
    *value == 0
}
