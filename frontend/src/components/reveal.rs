use yew::prelude::*;

use crate::utils::hooks::use_in_view;
use crate::utils::motion::Entrance;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub entrance: Entrance,
    #[prop_or("div")]
    pub tag: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays `entrance` the first time this element scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone());
    html! {
        <@{props.tag} ref={node} class={props.class.clone()} style={props.entrance.style(visible)}>
            { for props.children.iter() }
        </@>
    }
}
