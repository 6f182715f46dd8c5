use flexbox_template::TemplateNode;

use super::bindings::{Bindings, Bound, ToWidget};
use super::{common, to_flex, to_image, to_text, ComponentKind, RenderContext};
use crate::component::Component;
use crate::el::{PageContext, PropsElContext};

impl Bindings {
    /// Transform `node` and its subtree into components.
    ///
    /// `upper_visibility` is the effective visibility of the node's parent;
    /// pass `true` for a page root. Never fails: unknown tags produce no
    /// components and bad attribute values fall back.
    pub fn transform(
        &self,
        node: &TemplateNode,
        page: &PageContext,
        data: &PropsElContext,
        upper_visibility: bool,
        ctx: &RenderContext,
    ) -> Vec<Component> {
        match self.get(&node.kind) {
            Some(widget) => widget.to_widget(self, node, page, data, upper_visibility, ctx),
            None => {
                log::warn!("unknown component tag `{}`; skipping its subtree", node.kind);
                Vec::new()
            }
        }
    }

    fn transform_children(
        &self,
        node: &TemplateNode,
        page: &PageContext,
        data: &PropsElContext,
        visibility: bool,
        ctx: &RenderContext,
    ) -> Vec<Component> {
        node.children
            .iter()
            .flat_map(|child| self.transform(child, page, data, visibility, ctx))
            .collect()
    }
}

impl ToWidget {
    /// Transform one node of this widget's tag.
    ///
    /// Hidden nodes are still built and still recurse, with the hidden flag
    /// passed down, so a subtree keeps its shape whatever its visibility.
    pub fn to_widget(
        &self,
        bindings: &Bindings,
        node: &TemplateNode,
        page: &PageContext,
        data: &PropsElContext,
        upper_visibility: bool,
        ctx: &RenderContext,
    ) -> Vec<Component> {
        let visibility = upper_visibility && common::own_visibility(&node.attrs, page, data);
        let children = || bindings.transform_children(node, page, data, visibility, ctx);

        if let Some(factory) = &self.factory {
            let component = match self.kind {
                ComponentKind::Flex => Some(to_flex::create(visibility, &node.attrs, page, data, ctx, Vec::new)),
                ComponentKind::Text => Some(to_text::create(visibility, &node.attrs, page, data, ctx)),
                ComponentKind::Image => Some(to_image::create(visibility, &node.attrs, page, data, ctx)),
                ComponentKind::Fragment => None,
            };
            return factory(Bound { visible: visibility, component, children: children() }, ctx);
        }

        match self.kind {
            ComponentKind::Flex => {
                vec![to_flex::create(visibility, &node.attrs, page, data, ctx, children)]
            }
            ComponentKind::Text => leaf(node, to_text::create(visibility, &node.attrs, page, data, ctx)),
            ComponentKind::Image => leaf(node, to_image::create(visibility, &node.attrs, page, data, ctx)),
            ComponentKind::Fragment => children(),
        }
    }
}

fn leaf(node: &TemplateNode, component: Component) -> Vec<Component> {
    if !node.children.is_empty() {
        log::debug!("`{}` takes no children; ignoring {}", node.kind, node.children.len());
    }
    vec![component]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{FlexDirection, ScaleType, TextAlign};
    use flexbox_engine::paint::Color;
    use serde_json::json;

    fn run(node: &TemplateNode, data: serde_json::Value) -> Vec<Component> {
        Bindings::new().transform(
            node,
            &PageContext::new(),
            &PropsElContext::new(data),
            true,
            &RenderContext::default(),
        )
    }

    fn one(node: &TemplateNode) -> Component {
        let mut out = run(node, json!({}));
        assert_eq!(out.len(), 1);
        out.remove(0)
    }

    // ── kinds ─────────────────────────────────────────────────────────────

    #[test]
    fn unknown_tag_yields_nothing() {
        assert!(run(&TemplateNode::new("Marquee").child(TemplateNode::new("Text")), json!({})).is_empty());
    }

    #[test]
    fn every_drawn_kind_binds_the_common_block_first() {
        for kind in [ComponentKind::Flex, ComponentKind::Text, ComponentKind::Image] {
            let names = kind.attribute_names();
            assert_eq!(names[0], "visibility", "{kind:?}");
            assert!(names.contains(&"onClick"), "{kind:?}");
        }
        assert!(ComponentKind::Text.attribute_names().contains(&"maxLines"));
        assert!(ComponentKind::Image.attribute_names().ends_with(&["url"]));
        assert!(ComponentKind::Fragment.attribute_names().is_empty());
    }

    #[test]
    fn fragment_splices_its_children() {
        let node = TemplateNode::new("Flex").child(
            TemplateNode::new("Fragment")
                .child(TemplateNode::new("Text"))
                .child(TemplateNode::new("Image")),
        );
        let flex = one(&node);
        let kinds: Vec<_> = flex.children().iter().map(Component::kind).collect();
        assert_eq!(kinds, vec![ComponentKind::Text, ComponentKind::Image]);
    }

    #[test]
    fn defaults_without_attributes() {
        let text = one(&TemplateNode::new("Text"));
        let text = text.as_text().unwrap();
        assert_eq!(text.text_size, 14.0);
        assert_eq!(text.text_color, Color::BLACK);
        assert_eq!(text.text_align, TextAlign::Left);
        let common = &text.common;
        assert!(common.visible);
        assert_eq!(common.width, -1.0);
        assert_eq!(common.flex_shrink, 1.0);
        assert!(common.on_click.is_none());
    }

    #[test]
    fn enum_attributes_bind_and_fall_back() {
        let flex = one(&TemplateNode::new("Flex").attr("flexDirection", "column"));
        let Component::Flex(f) = &flex else { panic!("not a flex") };
        assert_eq!(f.direction, FlexDirection::Column);

        let img = one(&TemplateNode::new("Image").attr("scaleType", "stretchy"));
        assert_eq!(img.as_image().unwrap().scale_type, ScaleType::FitCenter);
    }

    #[test]
    fn on_click_binds_an_unevaluated_handler() {
        let node = TemplateNode::new("Flex").attr("onClick", "${open}");
        let data = PropsElContext::new(json!({})).with_handler("open", |_, p| p.send_event("opened"));
        let page = PageContext::new();
        let out = Bindings::new().transform(&node, &page, &data, true, &RenderContext::default());
        let handler = out[0].common().on_click.clone().unwrap();
        assert_eq!(handler.expr(), "${open}");
        assert_eq!(handler.dispatch(&page), Ok(true));
        assert_eq!(page.take_events(), vec!["opened"]);
    }

    #[test]
    fn density_scales_lengths() {
        let node = TemplateNode::new("Text").attr("width", 10).attr("textSize", 12);
        let out = Bindings::new().transform(
            &node,
            &PageContext::new(),
            &PropsElContext::new(json!({})),
            true,
            &RenderContext::new(2.0),
        );
        let text = out[0].as_text().unwrap();
        assert_eq!(text.common.width, 20.0);
        assert_eq!(text.text_size, 24.0);
        assert_eq!(text.common.height, -1.0);
    }

    // ── visibility ────────────────────────────────────────────────────────

    #[test]
    fn hidden_parent_hides_every_descendant() {
        let node = TemplateNode::new("Flex").attr("visibility", false).child(
            TemplateNode::new("Flex")
                .attr("visibility", true)
                .child(TemplateNode::new("Image").attr("url", "http://x/y.png")),
        );
        let root = one(&node);
        assert!(root.walk().iter().all(|c| !c.common().visible));
        assert_eq!(root.walk().len(), 3);
        let img = root.walk()[2].as_image().unwrap();
        assert_eq!(img.url, "");
    }

    #[test]
    fn visible_chain_stays_visible() {
        let node = TemplateNode::new("Flex")
            .child(TemplateNode::new("Text").attr("visibility", "${show}"))
            .child(TemplateNode::new("Text").attr("visibility", "${hide}"));
        let out = run(&node, json!({"show": true, "hide": false}));
        let vis: Vec<_> = out[0].walk().iter().map(|c| c.common().visible).collect();
        assert_eq!(vis, vec![true, true, false]);
    }

    #[test]
    fn malformed_visibility_means_visible() {
        let img = one(&TemplateNode::new("Image").attr("visibility", "maybe").attr("url", "u"));
        assert!(img.common().visible);
        assert_eq!(img.as_image().unwrap().url, "u");
    }

    // ── factories ─────────────────────────────────────────────────────────

    fn with_factory(bindings: &Bindings, node: &TemplateNode, data: serde_json::Value) -> Vec<Component> {
        bindings.transform(node, &PageContext::new(), &PropsElContext::new(data), true, &RenderContext::default())
    }

    #[test]
    fn factory_receives_bound_attributes() {
        let bindings = Bindings::new().with_factory("Card", ComponentKind::Text, |bound, _| {
            bound.component.into_iter().collect()
        });
        let node = TemplateNode::new("Card").attr("text", "${title}").attr("textSize", "huge");
        let out = with_factory(&bindings, &node, json!({ "title": "Hello" }));
        let text = out[0].as_text().unwrap();
        assert_eq!(text.text, "Hello");
        assert_eq!(text.text_size, 14.0);
    }

    #[test]
    fn factory_assembles_children() {
        let bindings = Bindings::new().with_factory("Card", ComponentKind::Flex, |bound, _| {
            assert!(!bound.visible);
            let Some(Component::Flex(mut flex)) = bound.component else { panic!("not a flex") };
            assert!(flex.children.is_empty());
            assert_eq!(flex.direction, FlexDirection::Column);
            flex.children = bound.children;
            vec![flex.into()]
        });
        let node = TemplateNode::new("Card")
            .attr("flexDirection", "column")
            .attr("visibility", false)
            .child(TemplateNode::new("Text"))
            .child(TemplateNode::new("Text"));
        let out = with_factory(&bindings, &node, json!({}));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].children().len(), 2);
        assert!(out[0].walk().iter().all(|c| !c.common().visible));
    }

    #[test]
    fn fragment_factory_gets_only_children() {
        let bindings = Bindings::new().with_factory("Group", ComponentKind::Fragment, |bound, _| {
            assert!(bound.component.is_none());
            bound.children.into_iter().rev().collect()
        });
        let node = TemplateNode::new("Group").child(TemplateNode::new("Text")).child(TemplateNode::new("Image"));
        let kinds: Vec<_> = with_factory(&bindings, &node, json!({})).iter().map(Component::kind).collect();
        assert_eq!(kinds, vec![ComponentKind::Image, ComponentKind::Text]);
    }

    #[test]
    fn empty_bindings_know_no_tags() {
        let out = Bindings::empty().transform(
            &TemplateNode::new("Text"),
            &PageContext::new(),
            &PropsElContext::new(json!({})),
            true,
            &RenderContext::default(),
        );
        assert!(out.is_empty());
    }
}
