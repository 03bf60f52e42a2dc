//! Breadcrumb trail component.
//!
//! Renders `Files > photos > 2020` for `/photos/2020`. The fixed root label
//! resets to root; every other segment jumps to its ancestor. The current
//! segment is disabled.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::ROOT_LABEL;

stylance::import_crate_style!(css, "src/components/browser/breadcrumbs.module.css");

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let browse = ctx.browse;

    let crumbs = Memo::new(move |_| browse.path.with(|p| p.breadcrumbs()));

    view! {
        <nav class=css::breadcrumbs aria-label="Breadcrumb">
            {move || {
                let crumbs = crumbs.get();

                let root = if crumbs.is_empty() {
                    view! { <SegmentCurrent icon=ic::HOME label=ROOT_LABEL.to_string() /> }
                        .into_any()
                } else {
                    view! {
                        <SegmentLink
                            icon=ic::HOME
                            label=ROOT_LABEL.to_string()
                            on_click=move || browse.reset()
                        />
                    }
                    .into_any()
                };

                let segments = crumbs
                    .into_iter()
                    .map(|crumb| {
                        let segment = if crumb.is_current {
                            view! { <SegmentCurrent icon=ic::FOLDER label=crumb.label /> }
                                .into_any()
                        } else {
                            let target = crumb.target;
                            view! {
                                <SegmentLink
                                    icon=ic::FOLDER
                                    label=crumb.label
                                    on_click=move || browse.jump_to(target.clone())
                                />
                            }
                            .into_any()
                        };

                        view! {
                            <>
                                <span class=css::separator aria-hidden="true">
                                    <Icon icon=ic::CHEVRON_RIGHT />
                                </span>
                                {segment}
                            </>
                        }
                    })
                    .collect_view();

                view! { <>{root}{segments}</> }
            }}
        </nav>
    }
}

/// Clickable segment.
#[component]
fn SegmentLink<F>(icon: icondata::Icon, label: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button class=css::segment on:click=move |_| on_click()>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button
            class=format!("{} {}", css::segment, css::segmentCurrent)
            disabled=true
            aria-current="page"
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
