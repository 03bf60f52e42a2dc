//! File grid component.
//!
//! Folders open in place; files link to their content on the static server.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::static_url_for;
use crate::models::{FileEntry, FileKind};
use crate::utils::format::{format_mod_time, format_size};

stylance::import_crate_style!(css, "src/components/browser/file_grid.module.css");

fn kind_icon(kind: FileKind) -> IconData {
    match kind {
        FileKind::Directory => ic::FOLDER,
        FileKind::Image => ic::FILE_IMAGE,
        FileKind::Text => ic::FILE_TEXT,
        FileKind::Pdf => ic::FILE_PDF,
        FileKind::Unknown => ic::FILE,
    }
}

/// Size and date line under a file card.
fn card_meta(entry: &FileEntry) -> String {
    format!(
        "{} · {}",
        format_size(entry.size),
        format_mod_time(&entry.mod_time)
    )
}

#[component]
pub fn FileGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let listing = ctx.browse.listing;

    let entries = Memo::new(move |_| listing.with(|slot| slot.entries()));
    let loading = Memo::new(move |_| listing.with(|slot| slot.is_loading()));
    let empty = Memo::new(move |_| {
        listing.with(|slot| slot.listing().is_some()) && entries.with(|e| e.is_empty())
    });

    view! {
        <Show when=move || loading.get()>
            <p class=css::placeholder>"Loading..."</p>
        </Show>
        <Show when=move || empty.get()>
            <p class=css::placeholder>"This folder is empty"</p>
        </Show>
        <div class=css::grid role="list" aria-label="Files">
            <For
                each=move || entries.get()
                key=|entry| entry.path.clone()
                children=move |entry| view! { <FileCard entry=entry /> }
            />
        </div>
    }
}

#[component]
fn FileCard(entry: FileEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let kind = entry.kind();
    let name = entry.name.clone();
    let title = entry.name.clone();

    if entry.is_dir {
        let target = entry.path.clone();
        return view! {
            <button
                class=format!("{} {}", css::card, css::cardFolder)
                role="listitem"
                title=title
                on:click=move |_| ctx.browse.descend(target.clone())
            >
                <span class=css::cardIcon><Icon icon=ic::FOLDER /></span>
                <span class=css::cardName>{name}</span>
            </button>
        }
        .into_any();
    }

    let href = static_url_for(&entry.path);
    let meta = card_meta(&entry);

    let preview = if kind == FileKind::Image {
        view! { <img class=css::thumbnail src=href.clone() alt=name.clone() loading="lazy" /> }
            .into_any()
    } else {
        view! { <span class=css::cardIcon><Icon icon=kind_icon(kind) /></span> }.into_any()
    };

    view! {
        <a
            class=css::card
            role="listitem"
            href=href
            target="_blank"
            rel="noopener noreferrer"
            title=title
        >
            {preview}
            <span class=css::cardName>{name}</span>
            <span class=css::cardMeta>{meta}</span>
        </a>
    }
    .into_any()
}
