//! Ordered style layering
//!
//! GPUI has no class lists; the unit of composable style is a
//! [`StyleRefinement`]. A [`StyleLayers`] stack keeps the fragments in order
//! and folds them so that later layers override earlier ones.

use gpui::{Div, Refineable, StyleRefinement, Styled, div};

/// Capture the refinement produced by a chain of `Styled` calls.
pub fn refinement(build: impl FnOnce(Div) -> Div) -> StyleRefinement {
    let mut element = build(div());
    element.style().clone()
}

/// An ordered stack of optional style fragments
#[derive(Debug, Clone, Default)]
pub struct StyleLayers {
    layers: Vec<StyleRefinement>,
}

impl StyleLayers {
    /// Start a stack with a base layer
    pub fn new(base: StyleRefinement) -> Self {
        Self { layers: vec![base] }
    }

    /// Push a layer on top of the stack
    pub fn layer(mut self, layer: StyleRefinement) -> Self {
        self.layers.push(layer);
        self
    }

    /// Push a layer only when `condition` holds
    pub fn layer_if(self, condition: bool, layer: impl FnOnce() -> StyleRefinement) -> Self {
        if condition { self.layer(layer()) } else { self }
    }

    /// Number of layers currently stacked
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Fold all layers bottom to top into a single refinement
    pub fn compose(&self) -> StyleRefinement {
        let mut composed = StyleRefinement::default();
        for layer in &self.layers {
            composed.refine(layer);
        }
        composed
    }

    /// Apply the composed refinement to an element
    pub fn apply<E: Styled>(&self, mut element: E) -> E {
        element.style().refine(&self.compose());
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::Position;

    #[test]
    fn test_later_layer_overrides_earlier() {
        let layers = StyleLayers::new(refinement(|d| d.relative()))
            .layer(refinement(|d| d.absolute().top_0()));

        let composed = layers.compose();
        assert_eq!(composed.position, Some(Position::Absolute));
        assert!(composed.inset.top.is_some());
    }

    #[test]
    fn test_override_keeps_untouched_fields() {
        let composed = StyleLayers::new(refinement(|d| d.relative()))
            .layer(refinement(|d| d.absolute().top_0()))
            .layer(refinement(|d| d.relative()))
            .compose();

        assert_eq!(composed.position, Some(Position::Relative));
        // The top inset from the middle layer survives.
        assert!(composed.inset.top.is_some());
    }

    #[test]
    fn test_conditional_layers_are_filtered() {
        let layers = StyleLayers::new(StyleRefinement::default())
            .layer_if(false, || refinement(|d| d.absolute()))
            .layer_if(false, || refinement(|d| d.flex_shrink_0()));

        assert_eq!(layers.len(), 1);
        assert_eq!(layers.compose().position, None);
    }
}
