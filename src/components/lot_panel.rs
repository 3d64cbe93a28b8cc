use crate::model::Lot;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LotPanelProps {
    pub lot: Option<Lot>,
    pub on_close: Callback<()>,
}

fn field_label(key: &str) -> String {
    let mut label = key.replace('_', " ");
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    label
}

/// Details of the lot picked on the map.
#[function_component]
pub fn LotPanel(props: &LotPanelProps) -> Html {
    let Some(lot) = &props.lot else {
        return html! {};
    };
    let status = lot.status();

    let panel_style = "position:absolute; right:12px; top:50%; transform:translateY(-50%); \
        background:rgba(255,255,255,0.97); border:1px solid #d0d7de; border-radius:8px; \
        padding:12px 16px; min-width:240px; max-width:280px; font-size:13px; color:#24292f;";
    let header_style = "font-weight:600; font-size:15px; margin-bottom:8px; display:flex; align-items:center; gap:8px;";
    let stat_row_style =
        "display:flex; justify-content:space-between; margin:4px 0; font-size:12px;";

    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div style={panel_style}>
            <div style={header_style}>
                <span>{format!("Lot {}", lot.lot_number)}</span>
                <span style="color:#57606a; font-size:12px; font-weight:400;">{status.label()}</span>
                <button onclick={close} style="margin-left:auto;">{"×"}</button>
            </div>
            <div style="margin-top:10px; padding-top:8px; border-top:1px solid #d0d7de;">
                { for lot.display_fields().map(|(key, value)| html! {
                    <div style={stat_row_style}>
                        <span style="color:#57606a;">{field_label(key)}</span>
                        <span style="font-weight:500;">{value}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
