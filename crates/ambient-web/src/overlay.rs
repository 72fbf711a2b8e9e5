use crate::dom;
use ambient_core::OverlayLayer;
use web_sys as web;

pub const OVERLAY_CLASS: &str = "ambient-backdrop__overlay";

/// Insert the static texture layer and its stylesheet into `parent`. Drawn
/// once; the stylesheet handles the light/dark opacity swap.
pub fn insert(
    document: &web::Document,
    parent: &web::Element,
    layer: &OverlayLayer,
) -> anyhow::Result<()> {
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("create <style>: {:?}", e))?;
    style.set_text_content(Some(layer.stylesheet(OVERLAY_CLASS).as_str()));
    dom::append(parent, &style)?;

    let div = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create <div>: {:?}", e))?;
    div.set_class_name(OVERLAY_CLASS);
    _ = div.set_attribute("aria-hidden", "true");
    dom::append(parent, &div)
}
