//! DOM element handles and style writers

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use super::style::{self, CURSOR_GRAB, CURSOR_GRABBING, HEART_SPRING_TRANSITION};
use crate::backdrop::FloatingHeart;
use crate::parse_px;
use crate::sim::{DropGeometry, Effect, Rect};

/// Required element ids
pub const HEART_ID: &str = "drag-heart";
pub const LOVE_ID: &str = "love-zone";
pub const TRASH_ID: &str = "trash-zone";
pub const FEEDBACK_ID: &str = "feedback-text";
pub const MAIN_CARD_ID: &str = "mainCard";
pub const SUCCESS_CARD_ID: &str = "successCard";
/// Optional container for the floating hearts
pub const BACKDROP_SELECTOR: &str = ".dynamic-background";

/// Every element the controller reads or writes
pub struct Elements {
    pub heart: HtmlElement,
    pub love: HtmlElement,
    pub trash: HtmlElement,
    pub feedback: HtmlElement,
    pub main_card: HtmlElement,
    pub success_card: HtmlElement,
}

impl Elements {
    /// Look up all required elements; any missing one is a setup error
    pub fn find(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            heart: html_by_id(document, HEART_ID)?,
            love: html_by_id(document, LOVE_ID)?,
            trash: html_by_id(document, TRASH_ID)?,
            feedback: html_by_id(document, FEEDBACK_ID)?,
            main_card: html_by_id(document, MAIN_CARD_ID)?,
            success_card: html_by_id(document, SUCCESS_CARD_ID)?,
        })
    }

    /// Heart left/top in px as laid out right now
    ///
    /// Uses the computed style, which resolves the anchor percentages to px.
    pub fn heart_origin(&self, window: &Window) -> Vec2 {
        let computed = window.get_computed_style(&self.heart).ok().flatten();
        let read = |prop: &str| {
            computed
                .as_ref()
                .and_then(|style| style.get_property_value(prop).ok())
                .and_then(|value| parse_px(&value))
        };
        match (read("left"), read("top")) {
            (Some(left), Some(top)) => Vec2::new(left, top),
            // Centre of the layout box, matching translate(-50%, -50%)
            _ => Vec2::new(
                (self.heart.offset_left() + self.heart.offset_width() / 2) as f32,
                (self.heart.offset_top() + self.heart.offset_height() / 2) as f32,
            ),
        }
    }

    pub fn trash_rect(&self) -> Rect {
        rect_of(&self.trash)
    }

    /// Boxes for drop classification, measured now
    pub fn drop_geometry(&self) -> DropGeometry {
        DropGeometry {
            heart: rect_of(&self.heart),
            love: rect_of(&self.love),
            trash: rect_of(&self.trash),
        }
    }

    /// Apply a visual effect
    ///
    /// Timers and bursts are not visual and are left to the caller.
    pub fn apply(&self, effect: &Effect) {
        match effect {
            Effect::Grab => {
                set(&self.heart, "transition", "none");
                set(&self.heart, "cursor", CURSOR_GRABBING);
            }
            Effect::Release => {
                set(&self.heart, "transition", HEART_SPRING_TRANSITION);
                set(&self.heart, "cursor", CURSOR_GRAB);
            }
            Effect::PlaceHeart(placement) => {
                let css = style::heart_css(*placement);
                set(&self.heart, "left", &css.left);
                set(&self.heart, "top", &css.top);
                if let Some(transform) = css.transform {
                    set(&self.heart, "transform", transform);
                }
            }
            Effect::DodgeStart { offset } => {
                set(&self.trash, "transition", style::TRASH_DODGE_TRANSITION);
                set(
                    &self.trash,
                    "transform",
                    &style::trash_transform(*offset, style::TRASH_DODGE_SCALE),
                );
                set(&self.trash, "opacity", style::TRASH_DODGE_OPACITY);
            }
            Effect::MoveTrash(offset) => {
                set(&self.trash, "transition", style::TRASH_LAND_TRANSITION);
                set(&self.trash, "transform", &style::trash_transform(*offset, 1.0));
                set(&self.trash, "opacity", "1");
            }
            Effect::Feedback { text, anim } => {
                self.feedback.set_inner_text(text);
                // Restart the animation even if it is the same one
                set(&self.feedback, "animation", "none");
                let _ = self.feedback.offset_height();
                set(&self.feedback, "animation", style::feedback_animation(*anim));
            }
            Effect::ShowSuccess => {
                set(&self.main_card, "display", "none");
                let _ = self.success_card.class_list().remove_1("hidden");
                set(&self.success_card, "display", "block");
            }
            Effect::Burst(_) | Effect::StartBurstLoop { .. } | Effect::Schedule { .. } => {}
        }
    }
}

/// Append the floating hearts to the backdrop container, if the page has one
pub fn spawn_backdrop(document: &Document, hearts: &[FloatingHeart]) -> Result<(), JsValue> {
    let Some(container) = document.query_selector(BACKDROP_SELECTOR)? else {
        log::debug!("No {} container, skipping backdrop", BACKDROP_SELECTOR);
        return Ok(());
    };
    for heart in hearts {
        let el: HtmlElement = document.create_element("div")?.dyn_into()?;
        el.class_list().add_1("bg-heart")?;
        el.set_inner_text(heart.glyph);
        set(&el, "left", &format!("{}%", heart.left_pct));
        set(&el, "animation-duration", &format!("{}s", heart.duration_s));
        set(&el, "animation-delay", &format!("{}s", heart.delay_s));
        container.append_child(&el)?;
    }
    log::info!("Spawned {} background hearts", hearts.len());
    Ok(())
}

fn html_by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HTML element", id)))
}

fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

fn set(el: &HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}
