//! Manage Menus
//!
//! Flat, indented table over the menu tree. Rows can be dragged onto another
//! row (become its last child) or into the gap above a row (take that slot).
//! Drops are staged in the store and only reach the server through
//! "Save All"; every write is followed by a fresh fetch.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    bind_global_drag, create_dnd_state, make_on_gap_mouseenter, make_on_mouseleave, make_on_mousedown,
    make_on_row_mouseenter, DndState, DropTarget,
};
use reactive_stores::Store;
use tracing::{info, warn};

use super::load_categories;
use crate::api;
use crate::components::{alert, AdminLayout, DeleteConfirmButton, PostPicker};
use crate::context::{use_app, AppContext};
use crate::error::TreeError;
use crate::menu_editor::{MenuForm, SaveRequest};
use crate::models::{Category, MenuRow};
use crate::store::{
    store_load_rows, store_post_title, store_remember_post, store_rows_untracked, store_set_loading,
    store_stage_rows, use_menu_store, MenuEditorState, MenuEditorStateStoreFields, MenuEditorStore,
};
use crate::tree::{self, bulk_items, sibling_position};

/// Rows after dropping `dragged` on `target`
fn apply_drop(rows: &[MenuRow], dragged: u64, target: DropTarget) -> Result<Vec<MenuRow>, TreeError> {
    match target {
        DropTarget::Onto(parent) => tree::reparent(rows, dragged, Some(parent), usize::MAX),
        DropTarget::Between(parent, position) => tree::reparent(rows, dragged, parent, position),
    }
}

/// Re-fetch the tree, replacing any staged rows
fn fetch_menus(app: AppContext, store: MenuEditorStore) {
    store_set_loading(&store, true);
    let api = app.api();
    spawn_local(async move {
        match api::list_menus(&api).await {
            Ok(nodes) => store_load_rows(&store, tree::flatten(&nodes)),
            Err(e) => {
                warn!("[MENUS] failed to load: {}", e);
                store_set_loading(&store, false);
            }
        }
    });
}

#[component]
pub fn MenusPage() -> impl IntoView {
    let app = use_app();
    let store: MenuEditorStore = Store::new(MenuEditorState::default());
    provide_context(store);

    let form = RwSignal::new(MenuForm::default());
    let picker_open = RwSignal::new(false);
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let dnd = create_dnd_state();

    load_categories(set_categories);
    fetch_menus(app, store);

    bind_global_drag(dnd, move |dragged, target| {
        let rows = store_rows_untracked(&store);
        match apply_drop(&rows, dragged, target) {
            Ok(staged) => {
                info!("[MENUS] staged move of {} to {:?}", dragged, target);
                store_stage_rows(&store, staged);
            }
            Err(e) => alert(&e.to_string()),
        }
    });

    let on_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(e) = current.validate(&store_rows_untracked(&store)) {
            alert(&e.to_string());
            return;
        }
        let api = app.api();
        spawn_local(async move {
            let result = match current.save_request() {
                SaveRequest::Create(payload) => api::create_menu(&api, &payload).await,
                SaveRequest::Update(id, payload) => api::update_menu(&api, id, &payload).await,
            };
            match result {
                Ok(()) => {
                    fetch_menus(app, store);
                    form.update(MenuForm::reset);
                }
                Err(e) => alert(&e.user_message("Error saving menu")),
            }
        });
    };

    let save_all = move |_: leptos::ev::MouseEvent| {
        let items = bulk_items(&store_rows_untracked(&store));
        let api = app.api();
        spawn_local(async move {
            match api::bulk_update_menus(&api, &items).await {
                Ok(()) => {
                    fetch_menus(app, store);
                    alert("Saved");
                }
                Err(e) => {
                    warn!("[MENUS] bulk save failed: {}", e);
                    alert("Save failed");
                }
            }
        });
    };

    let delete = move |id: u64| {
        let api = app.api();
        spawn_local(async move {
            match api::delete_menu(&api, id).await {
                Ok(()) => fetch_menus(app, store),
                Err(e) => alert(&e.user_message("Delete failed")),
            }
        });
    };

    let on_pick = Callback::new(move |(id, title): (u64, String)| {
        store_remember_post(&store, id, &title);
        form.update(|f| f.link_post(id, &title));
    });

    view! {
        <AdminLayout>
            <h1>"Manage Menus"</h1>
            <div class="toolbar">
                <button class="btn-primary" on:click=move |_| form.update(|f| f.open_add(None))>
                    "Add Top Menu"
                </button>
                <button class="btn-success" on:click=save_all>
                    "Save All"
                    {move || store.staged().get().then_some(" *")}
                </button>
                <button class="btn-secondary" on:click=move |_| fetch_menus(app, store)>
                    "Reload"
                </button>
            </div>

            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <p>"Loading..."</p> }
            >
                <table class="admin-table menu-table" class:dragging=move || dnd.is_dragging()>
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Parent"</th>
                            <th>"Order"</th>
                            <th>"Active"</th>
                            <th>"Post"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = store.rows().get();
                            rows.iter()
                                .map(|row| {
                                    let slot = sibling_position(&rows, row.id).unwrap_or(0);
                                    view! {
                                        <MenuGap dnd=dnd parent_id=row.parent_id position=slot/>
                                        <MenuRowView row=row.clone() dnd=dnd form=form on_delete=Callback::new(delete)/>
                                    }
                                })
                                .collect_view()
                        }}
                        <MenuGap dnd=dnd parent_id=None position=usize::MAX/>
                    </tbody>
                </table>
            </Show>

            <div class="menu-form">
                <h2>{move || if form.with(MenuForm::is_editing) { "Edit Menu" } else { "Add Menu" }}</h2>
                <form on:submit=on_save>
                    <label>"Title"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        required
                    />
                    <label>"URL"</label>
                    <input
                        type="text"
                        placeholder="/about"
                        prop:value=move || form.with(|f| f.url.clone())
                        on:input=move |ev| form.update(|f| f.url = event_target_value(&ev))
                    />
                    <label>"Active"</label>
                    <select
                        prop:value=move || if form.with(|f| f.active) { "1" } else { "0" }
                        on:change=move |ev| form.update(|f| f.active = event_target_value(&ev) == "1")
                    >
                        <option value="1">"Active"</option>
                        <option value="0">"Inactive"</option>
                    </select>
                    <label>"Link Post"</label>
                    <div class="link-post">
                        <input
                            type="text"
                            readonly
                            placeholder="No post linked"
                            prop:value=move || form.with(|f| f.post_title.clone())
                        />
                        <button type="button" class="btn-primary" on:click=move |_| picker_open.set(true)>
                            "Select"
                        </button>
                        <Show when=move || form.with(|f| f.post_id.is_some())>
                            <button type="button" class="btn-secondary" on:click=move |_| form.update(MenuForm::unlink_post)>
                                "Unlink"
                            </button>
                        </Show>
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn-primary">
                            {move || if form.with(MenuForm::is_editing) { "Update" } else { "Create" }}
                        </button>
                        <button type="button" class="btn-secondary" on:click=move |_| form.update(MenuForm::reset)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>

            <PostPicker open=picker_open categories=categories on_select=on_pick/>
        </AdminLayout>
    }
}

/// Drop zone above a row, or at the end of the table
#[component]
fn MenuGap(dnd: DndState, parent_id: Option<u64>, position: usize) -> impl IntoView {
    let target = DropTarget::Between(parent_id, position);
    view! {
        <tr
            class="menu-gap"
            class:drop-target=move || dnd.target.get() == Some(target)
            on:mouseenter=make_on_gap_mouseenter(dnd, parent_id, position)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <td colspan="6"></td>
        </tr>
    }
}

#[component]
fn MenuRowView(
    row: MenuRow,
    dnd: DndState,
    form: RwSignal<MenuForm>,
    on_delete: Callback<u64>,
) -> impl IntoView {
    let store = use_menu_store();
    let id = row.id;
    let indent = format!("padding-left: {}px", (row.level.saturating_sub(1)) * 20);
    let post_cell = move || match row.post_id {
        Some(pid) => store_post_title(&store, pid).unwrap_or_else(|| format!("#{}", pid)),
        None => "-".to_string(),
    };
    let edit_row = row.clone();

    view! {
        <tr
            class="menu-row"
            class:dragged=move || dnd.dragging.get() == Some(id)
            class:drop-target=move || dnd.target.get() == Some(DropTarget::Onto(id))
            on:mousedown=make_on_mousedown(dnd, id)
            on:mouseenter=make_on_row_mouseenter(dnd, id)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <td style=indent>{row.title.clone()}</td>
            <td>{row.parent_id.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())}</td>
            <td>{row.order}</td>
            <td>{if row.active { "Yes" } else { "No" }}</td>
            <td>{post_cell}</td>
            <td class="actions">
                <button class="btn-info" on:click=move |_| form.update(|f| f.open_add(Some(id)))>
                    "Add child"
                </button>
                <button
                    class="btn-warning"
                    on:click=move |_| {
                        if dnd.just_ended.get_untracked() {
                            return;
                        }
                        let title = edit_row.post_id.and_then(|pid| store_post_title(&store, pid));
                        form.update(|f| f.open_edit(&edit_row, title));
                    }
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    prompt="Are you sure to delete this menu?"
                    on_confirm=Callback::new(move |_| on_delete.run(id))
                />
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{flatten, make_node};

    /// 1 ─┬─ 3
    ///    └─ 4
    /// 2
    fn rows() -> Vec<MenuRow> {
        flatten(&[
            make_node(1, None, vec![make_node(3, None, vec![]), make_node(4, None, vec![])]),
            make_node(2, None, vec![]),
        ])
    }

    #[test]
    fn test_drop_onto_row_appends_child() {
        let staged = apply_drop(&rows(), 2, DropTarget::Onto(1)).unwrap();
        let ids: Vec<u64> = staged.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 2]);
        let moved = staged.iter().find(|r| r.id == 2).unwrap();
        assert_eq!(moved.parent_id, Some(1));
        assert_eq!(moved.level, 2);
        assert_eq!(moved.order, 2);
    }

    #[test]
    fn test_drop_into_gap_takes_slot() {
        let staged = apply_drop(&rows(), 4, DropTarget::Between(None, 0)).unwrap();
        let ids: Vec<u64> = staged.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 1, 3, 2]);
        assert_eq!(staged[0].level, 1);
    }

    #[test]
    fn test_drop_onto_descendant_rejected() {
        let err = apply_drop(&rows(), 1, DropTarget::Onto(3)).unwrap_err();
        assert_eq!(err, TreeError::Cycle { node: 1, parent: 3 });
    }
}
