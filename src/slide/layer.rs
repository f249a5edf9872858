// SPDX-License-Identifier: MPL-2.0
//! Layer tree used to mirror clipping state onto every visual layer.
//!
//! Hardware-composited video layers are often nested somewhere below the
//! player's root layer and do not inherit clipping from their ancestors, so
//! corner radius changes have to find and update them explicitly.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Plain backing layer of a view.
    Backing,
    /// Layer drawing a still image.
    Image,
    /// Root layer of an embedded player.
    Player,
    /// Hardware video composition layer.
    Video,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    kind: LayerKind,
    corner_radius: f32,
    masks_to_bounds: bool,
    children: Vec<Layer>,
}

impl Layer {
    #[must_use]
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            corner_radius: 0.0,
            masks_to_bounds: false,
            children: Vec::new(),
        }
    }

    /// Builder-style child insertion.
    #[must_use]
    pub fn with_child(mut self, child: Layer) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    #[must_use]
    pub fn masks_to_bounds(&self) -> bool {
        self.masks_to_bounds
    }

    #[must_use]
    pub fn children(&self) -> &[Layer] {
        &self.children
    }

    /// Sets the radius and clips to it whenever it is non-zero.
    pub fn set_corner_radius(&mut self, radius: f32) {
        let radius = radius.max(0.0);
        self.corner_radius = radius;
        self.masks_to_bounds = radius > 0.0;
    }

    /// First descendant (depth-first, pre-order, root excluded) matching
    /// `predicate`.
    pub fn find_descendant<F>(&self, predicate: &F) -> Option<&Layer>
    where
        F: Fn(&Layer) -> bool,
    {
        for child in &self.children {
            if predicate(child) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(predicate) {
                return Some(found);
            }
        }
        None
    }

    /// Mutable variant of [`Layer::find_descendant`].
    pub fn find_descendant_mut<F>(&mut self, predicate: &F) -> Option<&mut Layer>
    where
        F: Fn(&Layer) -> bool,
    {
        for child in &mut self.children {
            if predicate(&*child) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant_mut(predicate) {
                return Some(found);
            }
        }
        None
    }

    /// First descendant of the given kind.
    pub fn find_kind_mut(&mut self, kind: LayerKind) -> Option<&mut Layer> {
        self.find_descendant_mut(&|layer: &Layer| layer.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_tree() -> Layer {
        Layer::new(LayerKind::Player)
            .with_child(Layer::new(LayerKind::Backing).with_child(Layer::new(LayerKind::Image)))
            .with_child(
                Layer::new(LayerKind::Backing)
                    .with_child(Layer::new(LayerKind::Backing).with_child(Layer::new(LayerKind::Video))),
            )
    }

    #[test]
    fn finds_deeply_nested_layer() {
        let mut tree = player_tree();
        let video = tree.find_kind_mut(LayerKind::Video).expect("video layer present");
        video.set_corner_radius(6.0);

        let found = tree
            .find_descendant(&|layer: &Layer| layer.kind() == LayerKind::Video)
            .expect("video layer present");
        assert_eq!(found.corner_radius(), 6.0);
        assert!(found.masks_to_bounds());
    }

    #[test]
    fn search_excludes_root() {
        let mut tree = Layer::new(LayerKind::Video);
        assert!(tree.find_kind_mut(LayerKind::Video).is_none());
    }

    #[test]
    fn search_is_pre_order() {
        let tree = Layer::new(LayerKind::Player)
            .with_child(Layer::new(LayerKind::Backing).with_child(Layer::new(LayerKind::Image)))
            .with_child(Layer::new(LayerKind::Image));

        let first = tree
            .find_descendant(&|layer: &Layer| layer.kind() != LayerKind::Player)
            .expect("descendant present");
        assert_eq!(first.kind(), LayerKind::Backing);
    }

    #[test]
    fn zero_radius_disables_clipping() {
        let mut layer = Layer::new(LayerKind::Backing);
        layer.set_corner_radius(4.0);
        layer.set_corner_radius(0.0);
        assert!(!layer.masks_to_bounds());

        layer.set_corner_radius(-3.0);
        assert_eq!(layer.corner_radius(), 0.0);
    }
}
