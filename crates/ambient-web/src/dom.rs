use ambient_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

// Fixed full-viewport layer that never takes pointer input
pub const LAYER_STYLE: &str =
    "position:fixed;inset:0;width:100%;height:100%;pointer-events:none;overflow:hidden;";
pub const CANVAS_STYLE: &str =
    "position:absolute;inset:0;width:100%;height:100%;z-index:0;pointer-events:none;";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current `innerWidth` x `innerHeight`; zero when the window reports nothing usable.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w as f32, h as f32)
}

pub fn create_styled(
    document: &web::Document,
    tag: &str,
    style: &str,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    _ = el.set_attribute("style", style);
    Ok(el)
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    create_styled(document, "canvas", CANVAS_STYLE)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}
