//! Browser side of the lot map: loads the listing and the SVG, activates the
//! lots, and forwards pointer and wheel events to the [`PanZoomViewer`].
//!
//! Everything registered on the page is owned by [`InteractiveMap`]; dropping
//! it detaches every listener.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, PointerEvent,
    SvgGraphicsElement, WheelEvent,
};
use yew::Callback;

use crate::config::MapConfig;
use crate::error::MapError;
use crate::model::{Lot, LotStatus, ProjectPost};
use crate::state::interactable::{self, SELECTED_CLASS, UNLISTED_OPACITY};
use crate::state::{BBox, LotSelection, Point, ViewState};
use crate::surface::DomSurface;
use crate::util::{SVG_NS, is_block_element_id, is_lot_element_id, is_mobile_user_agent};
use crate::viewer::{PanZoomViewer, PointerInput, PointerKind, WheelInput, ZoomDirection};

type SharedViewer = Rc<RefCell<PanZoomViewer<DomSurface>>>;

/// An event listener that removes itself from its target when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        passive: Option<bool>,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, MapError> {
        let function = callback.as_ref().unchecked_ref();
        match passive {
            Some(passive) => {
                let options = AddEventListenerOptions::new();
                options.set_passive(passive);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    event, function, &options,
                )?;
            }
            None => target.add_event_listener_with_callback(event, function)?,
        }
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("removing {} listener failed: {err:?}", self.event);
        }
    }
}

/// The two shared tooltip icons shown over reserved and sold-out lots.
#[derive(Clone)]
struct Tooltips {
    reserved: Element,
    sold_out: Element,
}

impl Tooltips {
    fn create(document: &Document, config: &MapConfig, origin: &str) -> Result<Self, MapError> {
        let icon = |file: &str| -> Result<Element, MapError> {
            let el = document.create_element_ns(Some(SVG_NS), "image")?;
            el.set_attribute("href", &config.asset_url(origin, file))?;
            el.set_attribute("class", "map-tooltip no-user-interaction")?;
            Ok(el)
        };
        Ok(Self { reserved: icon("reserved.svg")?, sold_out: icon("sold_out.svg")? })
    }

    fn for_status(&self, status: LotStatus) -> Option<&Element> {
        match status {
            LotStatus::Reserved => Some(&self.reserved),
            LotStatus::SoldOut => Some(&self.sold_out),
            LotStatus::Available | LotStatus::Unknown => None,
        }
    }
}

pub struct InteractiveMap {
    viewer: SharedViewer,
    selection: Rc<RefCell<LotSelection>>,
    document: Document,
    listeners: Vec<Listener>,
}

impl InteractiveMap {
    /// Loads and wires the map, logging any failure. The page keeps working
    /// without the map when this returns `None`.
    pub async fn init(config: MapConfig, on_select: Callback<Lot>) -> Option<Self> {
        match Self::try_init(config, on_select).await {
            Ok(map) => Some(map),
            Err(err) => {
                log::error!("{err}");
                None
            }
        }
    }

    pub async fn try_init(config: MapConfig, on_select: Callback<Lot>) -> Result<Self, MapError> {
        let window = web_sys::window().ok_or_else(|| MapError::Dom("no window".into()))?;
        let document = window.document().ok_or_else(|| MapError::Dom("no document".into()))?;
        let layer: HtmlElement = document
            .get_element_by_id(&config.container_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| MapError::ContainerNotFound(config.container_id.clone()))?;
        let viewport: Element = layer.parent_element().unwrap_or_else(|| layer.clone().into());

        // The map still draws without prices and statuses.
        let lots = match fetch_lots(&config).await {
            Ok(lots) => lots,
            Err(err) => {
                log::error!("listing unavailable: {err}");
                Vec::new()
            }
        };
        log::debug!("{} listed lots", lots.len());

        let origin = window.location().origin()?;
        let svg = fetch_text(&config.asset_url(&origin, &config.map_file_name())).await?;
        // Replaces the preloader along with anything else in the container.
        layer.set_inner_html(&svg);
        log::info!("{} loaded", config.map_file_name());

        let tooltips = Tooltips::create(&document, &config, &origin)?;
        let selection = Rc::new(RefCell::new(LotSelection::default()));
        let mut listeners = activate_lots(
            &document, &layer, &config, &origin, lots, &tooltips, &selection, on_select,
        )?;

        let mobile = window
            .navigator()
            .user_agent()
            .map(|ua| is_mobile_user_agent(&ua))
            .unwrap_or(false);
        if !mobile {
            layer.class_list().add_1("interactive-map-animated")?;
        }

        let style = layer.style();
        style.set_property("touch-action", "none")?;
        style.set_property("transform-origin", "0 0")?;

        let viewer: SharedViewer = Rc::new(RefCell::new(PanZoomViewer::new(
            DomSurface::new(viewport, layer.clone()),
            config.viewer.clone(),
        )));
        listeners.extend(listen(&viewer, &layer)?);

        if let Some(svg_root) = layer.first_element_child() {
            svg_root.append_child(&tooltips.reserved)?;
            svg_root.append_child(&tooltips.sold_out)?;
        }

        Ok(Self { viewer, selection, document, listeners })
    }

    /// While disabled the map ignores drags, pinches and the wheel.
    pub fn set_disabled(&self, disabled: bool) {
        self.viewer.borrow_mut().set_disabled(disabled);
    }

    pub fn zoom(&self, direction: ZoomDirection) {
        self.viewer.borrow_mut().zoom_step(direction);
    }

    pub fn reset_view(&self) {
        self.viewer.borrow_mut().reset_view();
    }

    /// Unhighlights the selected lot so clicking it selects it again.
    pub fn clear_selection(&self) {
        let cleared = self.selection.borrow_mut().clear();
        if let Some(id) = cleared {
            set_highlight(&self.document, &id, false);
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.viewer.borrow().view()
    }
}

impl Drop for InteractiveMap {
    fn drop(&mut self) {
        log::debug!("detaching {} map listeners", self.listeners.len());
        self.listeners.clear();
    }
}

async fn fetch_text(url: &str) -> Result<String, MapError> {
    let response = Request::get(url).send().await?;
    if response.status() != 200 {
        return Err(MapError::ContentLoad { url: url.to_string(), status: response.status() });
    }
    Ok(response.text().await?)
}

async fn fetch_lots(config: &MapConfig) -> Result<Vec<Lot>, MapError> {
    let raw = fetch_text(&config.listing_url()).await?;
    Ok(ProjectPost::from_json(&raw)?.active_lots())
}

fn bbox_of(el: &Element) -> Option<BBox> {
    let rect = el.dyn_ref::<SvgGraphicsElement>()?.get_b_box().ok()?;
    Some(BBox {
        x: f64::from(rect.x()),
        y: f64::from(rect.y()),
        width: f64::from(rect.width()),
        height: f64::from(rect.height()),
    })
}

fn fill_lot(lot_el: &Element, color: &str) -> Result<(), MapError> {
    let paths = lot_el.query_selector_all("[id^='Group '] > path")?;
    for i in 0..paths.length() {
        if let Some(path) = paths.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            path.set_attribute("fill", color)?;
        }
    }
    Ok(())
}

fn add_sold_out_cross(
    document: &Document,
    lot_el: &Element,
    config: &MapConfig,
    origin: &str,
) -> Result<(), MapError> {
    let bbox = lot_el.query_selector("[id^='Group ']")?.as_ref().and_then(bbox_of);
    let Some(bbox) = bbox else {
        log::warn!("Add Cross icon failed for {}", lot_el.id());
        return Ok(());
    };
    let (cx, cy) = interactable::cross_offset(bbox);
    let icon = document.create_element_ns(Some(SVG_NS), "image")?;
    icon.set_attribute("href", &config.asset_url(origin, "sold_out_cross.svg"))?;
    icon.set_attribute("class", "no-user-interaction")?;
    icon.set_attribute("transform", &format!("translate({cx},{cy})"))?;
    lot_el.append_child(&icon)?;
    Ok(())
}

fn show_tooltip(icon: &Element, lot_el: &Element) {
    let Some(bbox) = bbox_of(lot_el) else {
        return;
    };
    let (x, y) = interactable::tooltip_offset(bbox);
    let classes = icon.class_list();
    let shown = classes
        .remove_1("fade")
        .and_then(|()| icon.set_attribute("transform", &format!("translate({x},{y})")))
        .and_then(|()| classes.add_1("fade"));
    if let Err(err) = shown {
        log::warn!("tooltip for {} failed: {err:?}", lot_el.id());
    }
}

fn set_highlight(document: &Document, element_id: &str, on: bool) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    let classes = el.class_list();
    let result = if on { classes.add_1(SELECTED_CLASS) } else { classes.remove_1(SELECTED_CLASS) };
    if let Err(err) = result {
        log::warn!("highlight on {element_id} failed: {err:?}");
    }
}

/// Styles every lot by status and registers its click handler.
#[allow(clippy::too_many_arguments)]
fn activate_lots(
    document: &Document,
    layer: &HtmlElement,
    config: &MapConfig,
    origin: &str,
    lots: Vec<Lot>,
    tooltips: &Tooltips,
    selection: &Rc<RefCell<LotSelection>>,
    on_select: Callback<Lot>,
) -> Result<Vec<Listener>, MapError> {
    let lots: Rc<Vec<Lot>> = Rc::new(lots);
    let mut listeners = Vec::new();
    let mut block_count = 0;
    let mut lot_count = 0;

    let blocks = layer.query_selector_all("[id^='BLOCK_']")?;
    for i in 0..blocks.length() {
        let Some(block) = blocks.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if !is_block_element_id(&block.id()) {
            continue;
        }
        block_count += 1;
        let children = block.children();
        for j in 0..children.length() {
            let Some(lot_el) = children.item(j) else { continue };
            let id = lot_el.id();
            if !is_lot_element_id(&id) {
                continue;
            }
            lot_count += 1;

            let Some(lot) = interactable::find_lot(&lots, &id) else {
                if let Some(svg_el) = lot_el.dyn_ref::<web_sys::SvgElement>() {
                    svg_el.style().set_property("opacity", UNLISTED_OPACITY)?;
                }
                continue;
            };
            let status = lot.status();
            if let Some(color) = status.fill_color() {
                fill_lot(&lot_el, color)?;
            }
            if status == LotStatus::SoldOut {
                add_sold_out_cross(document, &lot_el, config, origin)?;
            }

            let callback: Closure<dyn FnMut(Event)> = match (status, tooltips.for_status(status)) {
                (LotStatus::Available, _) => {
                    let lots = lots.clone();
                    let selection = selection.clone();
                    let document = document.clone();
                    let on_select = on_select.clone();
                    Closure::wrap(Box::new(move |_e: Event| {
                        select_lot(&document, &lots, &selection, &on_select, &id);
                    }) as Box<dyn FnMut(_)>)
                }
                (_, Some(icon)) => {
                    let icon = icon.clone();
                    let target = lot_el.clone();
                    Closure::wrap(Box::new(move |_e: Event| {
                        show_tooltip(&icon, &target);
                    }) as Box<dyn FnMut(_)>)
                }
                (_, None) => continue,
            };
            listeners.push(Listener::attach(&lot_el, "click", None, callback)?);
        }
    }

    log::debug!("Blocks found: {block_count}");
    log::debug!("Houses found: {lot_count}");
    Ok(listeners)
}

fn select_lot(
    document: &Document,
    lots: &[Lot],
    selection: &RefCell<LotSelection>,
    on_select: &Callback<Lot>,
    id: &str,
) {
    let Some(change) = selection.borrow_mut().select(id) else {
        return;
    };
    if let Some(prev) = &change.previous {
        set_highlight(document, prev, false);
    }
    set_highlight(document, &change.current, true);
    if let Some(lot) = interactable::find_lot(lots, id) {
        log::debug!("lot {} selected", lot.lot_number);
        on_select.emit(lot.clone());
    }
}

fn pointer_input(viewer: &PanZoomViewer<DomSurface>, e: &PointerEvent) -> PointerInput {
    let origin = viewer.surface().viewport().get_bounding_client_rect();
    PointerInput {
        id: e.pointer_id(),
        position: Point::new(
            f64::from(e.client_x()) - origin.left(),
            f64::from(e.client_y()) - origin.top(),
        ),
        kind: PointerKind::from_dom(&e.pointer_type()),
    }
}

fn pointer_listener(
    viewer: &SharedViewer,
    target: &EventTarget,
    event: &'static str,
    handler: fn(&mut PanZoomViewer<DomSurface>, &PointerEvent),
) -> Result<Listener, MapError> {
    let viewer = viewer.clone();
    let callback = Closure::wrap(Box::new(move |e: Event| {
        if let Some(e) = e.dyn_ref::<PointerEvent>() {
            handler(&mut viewer.borrow_mut(), e);
        }
    }) as Box<dyn FnMut(_)>);
    Listener::attach(target, event, None, callback)
}

/// Routes the layer's pointer and wheel events into the viewer.
fn listen(viewer: &SharedViewer, layer: &HtmlElement) -> Result<Vec<Listener>, MapError> {
    let target: &EventTarget = layer.as_ref();
    let mut listeners = vec![
        pointer_listener(viewer, target, "pointerdown", |v, e| {
            if e.pointer_type() != "touch" {
                e.prevent_default();
            }
            let input = pointer_input(v, e);
            v.on_pointer_down(input);
        })?,
        pointer_listener(viewer, target, "pointermove", |v, e| {
            e.prevent_default();
            let input = pointer_input(v, e);
            v.on_pointer_move(input);
        })?,
        pointer_listener(viewer, target, "pointerup", |v, e| {
            let input = pointer_input(v, e);
            v.on_pointer_up(input);
        })?,
        pointer_listener(viewer, target, "pointerleave", |v, e| {
            let input = pointer_input(v, e);
            v.on_pointer_up(input);
        })?,
        pointer_listener(viewer, target, "pointercancel", |v, e| {
            let input = pointer_input(v, e);
            v.on_pointer_cancel(input);
        })?,
    ];

    let wheel_viewer = viewer.clone();
    let wheel = Closure::wrap(Box::new(move |e: Event| {
        let Some(e) = e.dyn_ref::<WheelEvent>() else { return };
        e.prevent_default();
        let mut v = wheel_viewer.borrow_mut();
        let origin = v.surface().viewport().get_bounding_client_rect();
        v.on_wheel(WheelInput {
            position: Point::new(
                f64::from(e.client_x()) - origin.left(),
                f64::from(e.client_y()) - origin.top(),
            ),
            delta: -e.delta_y(),
        });
    }) as Box<dyn FnMut(_)>);
    // Non-passive so preventDefault can stop the page from scrolling.
    listeners.push(Listener::attach(target, "wheel", Some(false), wheel)?);
    Ok(listeners)
}
