use super::legend::LegendRow;
use crate::model::LotStatus;
use yew::prelude::*;

const AVAILABLE_COLOR: &str = "#6fbf73";

#[function_component]
pub fn LegendPanel() -> Html {
    let reserved = LotStatus::Reserved.fill_color().unwrap_or("#A7A7A7");
    let sold_out = LotStatus::SoldOut.fill_color().unwrap_or("#FF6230");
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(255,255,255,0.92); border:1px solid #d0d7de; border-radius:8px; padding:8px; min-width:150px; font-size:13px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        <LegendRow color={AVAILABLE_COLOR} label="Available" />
        <LegendRow color={reserved} label="Reserved" />
        <LegendRow color={sold_out} label="Sold out" />
        <LegendRow color={AVAILABLE_COLOR} label="Not listed" opacity={0.2} />
    </div>}
}
