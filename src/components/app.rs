use super::{legend_panel::LegendPanel, lot_panel::LotPanel, map_controls::MapControls};
use crate::config::MapConfig;
use crate::interactive_map::InteractiveMap;
use crate::model::Lot;
use crate::viewer::ZoomDirection;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: MapConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let map = use_mut_ref(|| None::<InteractiveMap>);
    let selected = use_state(|| None::<Lot>);
    let loading = use_state(|| true);

    // Load the map once; dropping it on unmount detaches its listeners.
    {
        let map = map.clone();
        let selected = selected.clone();
        let loading = loading.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let slot = map.clone();
            let on_select = Callback::from(move |lot: Lot| selected.set(Some(lot)));
            wasm_bindgen_futures::spawn_local(async move {
                let loaded = InteractiveMap::init(config, on_select).await;
                *slot.borrow_mut() = loaded;
                loading.set(false);
            });
            move || {
                map.borrow_mut().take();
            }
        });
    }

    // The map stays still while the lot panel is open.
    {
        let map = map.clone();
        let open = selected.is_some();
        use_effect_with(open, move |open| {
            if let Some(m) = &*map.borrow() {
                m.set_disabled(*open);
            }
            || ()
        });
    }

    let zoom = |direction: ZoomDirection| {
        let map = map.clone();
        Callback::from(move |_| {
            if let Some(m) = &*map.borrow() {
                m.zoom(direction);
            }
        })
    };
    let on_reset = {
        let map = map.clone();
        Callback::from(move |_| {
            if let Some(m) = &*map.borrow() {
                m.reset_view();
            }
        })
    };
    let on_close = {
        let map = map.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            if let Some(m) = &*map.borrow() {
                m.clear_selection();
            }
            selected.set(None);
        })
    };

    html! {
        <div style="position:relative; width:100%; height:100vh; overflow:hidden; background:#f6f6f3;">
            <div style="position:absolute; inset:0; overflow:hidden;">
                // The map owns this element's children once loaded.
                <div id={props.config.container_id.clone()}></div>
            </div>
            { if *loading { html!{ <div class="map-preloader" style="position:absolute; top:24px; left:24px; color:#57606a;">{"Loading map…"}</div> } } else { html!{} } }
            <MapControls on_zoom_in={zoom(ZoomDirection::In)} on_zoom_out={zoom(ZoomDirection::Out)} on_reset={on_reset} />
            <LegendPanel />
            <LotPanel lot={(*selected).clone()} on_close={on_close} />
        </div>
    }
}
