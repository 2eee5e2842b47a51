use tables::changes::RoleUpsert;
use tables::rows::UserRole;
use tables::{Order, Role, UserId};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::{ConfirmationModal, RequireRole};
use crate::contexts::use_toast;
use crate::get_table_client;
use crate::hooks::{use_fetch, use_title};
use crate::utils::time::format_date;

#[function_component]
pub fn AdminUsersPage() -> Html {
    use_title("User admin - Vektra Machinery");

    html! {
        <RequireRole min={Role::Admin}>
            <AdminUsersPageInner />
        </RequireRole>
    }
}

#[function_component]
fn AdminUsersPageInner() -> Html {
    let overrides = use_fetch((), move || async move {
        let client = get_table_client();
        client
            .from("user_roles")
            .order("updated_at", Order::Desc)
            .fetch::<UserRole>()
            .await
            .map_err(|e| e.to_string())
    });
    let toast = use_toast();

    let saving = use_state(|| None::<UserId>);
    let remove_target = use_state(|| None::<UserRole>);
    let is_removing = use_state(|| false);

    let on_change_role = {
        let saving = saving.clone();
        let toast = toast.clone();
        let refetch = overrides.refetch.clone();

        Callback::from(move |(user_id, role): (UserId, Role)| {
            let saving = saving.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            saving.set(Some(user_id));
            spawn_local(async move {
                let client = get_table_client();
                let upsert = RoleUpsert { user_id, role };
                match client.upsert("user_roles", "user_id", &upsert).await {
                    Ok(()) => {
                        toast.success(
                            "Role updated",
                            format!("{} is now {}", user_id, role),
                        );
                        refetch.emit(());
                    }
                    Err(e) => {
                        toast.error("Role change failed", e.to_string());
                    }
                }
                saving.set(None);
            });
        })
    };

    let on_confirm_remove = {
        let remove_target = remove_target.clone();
        let is_removing = is_removing.clone();
        let toast = toast.clone();
        let refetch = overrides.refetch.clone();

        Callback::from(move |_| {
            let Some(row) = (*remove_target).clone() else {
                return;
            };
            let remove_target = remove_target.clone();
            let is_removing = is_removing.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            is_removing.set(true);
            spawn_local(async move {
                let client = get_table_client();
                match client
                    .delete("user_roles", "user_id", row.user_id)
                    .await
                {
                    Ok(()) => {
                        toast.success(
                            "Override removed",
                            format!("{} is back to ordinary access", row.user_id),
                        );
                        remove_target.set(None);
                        refetch.emit(());
                    }
                    Err(e) => {
                        toast.error("Removal failed", e.to_string());
                    }
                }
                is_removing.set(false);
            });
        })
    };

    let on_cancel_remove = {
        let remove_target = remove_target.clone();
        Callback::from(move |_| {
            remove_target.set(None);
        })
    };

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Users"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Role overrides. Accounts without an entry here have
                     ordinary user access."}
                </p>
            </div>

            <AddOverrideForm on_saved={overrides.refetch.clone()} />

            {overrides.render("role overrides", |rows| {
                if rows.is_empty() {
                    return html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No role overrides exist yet."}
                            </p>
                        </div>
                    };
                }
                html! {
                    <div class="space-y-4">
                        {rows.iter().map(|row| {
                            let is_saving = *saving == Some(row.user_id);
                            let on_select = {
                                let on_change_role = on_change_role.clone();
                                let row = row.clone();
                                Callback::from(move |e: Event| {
                                    let target =
                                        e.target_dyn_into::<HtmlSelectElement>();
                                    if let Some(select) = target
                                        && let Ok(role) =
                                            select.value().parse::<Role>()
                                        && role != row.role
                                    {
                                        on_change_role.emit((row.user_id, role));
                                    }
                                })
                            };
                            let on_remove = {
                                let remove_target = remove_target.clone();
                                let row = row.clone();
                                Callback::from(move |_: MouseEvent| {
                                    remove_target.set(Some(row.clone()));
                                })
                            };

                            html! {
                                <div key={row.user_id.to_string()} class="bg-white dark:bg-neutral-800 p-6 rounded-lg border border-neutral-200 dark:border-neutral-700">
                                    <div class="flex justify-between items-center gap-4 flex-wrap">
                                        <div class="min-w-0">
                                            <div class="flex items-center gap-2 mb-1">
                                                <span class="font-mono text-sm text-neutral-900 dark:text-neutral-100 truncate">
                                                    {row.user_id.to_string()}
                                                </span>
                                                <RoleBadge role={row.role} />
                                            </div>
                                            <p class="text-sm text-neutral-500 dark:text-neutral-400">
                                                {format!("Updated {}", format_date(row.updated_at))}
                                            </p>
                                        </div>
                                        <div class="flex gap-2 items-center shrink-0">
                                            <select
                                                onchange={on_select}
                                                disabled={is_saving}
                                                class="px-3 py-1.5 text-sm border border-neutral-300 \
                                                       dark:border-neutral-600 rounded-md \
                                                       bg-white dark:bg-neutral-700 \
                                                       text-neutral-900 dark:text-neutral-100 \
                                                       disabled:opacity-50"
                                            >
                                                {for Role::ALL.iter().map(|role| {
                                                    html! {
                                                        <option
                                                            value={role.to_string()}
                                                            selected={*role == row.role}
                                                        >
                                                            {role.to_string()}
                                                        </option>
                                                    }
                                                })}
                                            </select>
                                            <button
                                                onclick={on_remove}
                                                class="px-3 py-1.5 text-sm font-medium rounded-md text-red-700 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/20"
                                            >
                                                {"Remove"}
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()}
                    </div>
                }
            })}

            if let Some(row) = &*remove_target {
                <ConfirmationModal
                    title="Remove role override"
                    message={format!(
                        "{} will lose {} access and revert to ordinary user access.",
                        row.user_id, row.role
                    )}
                    confirm_label="Remove override"
                    on_confirm={on_confirm_remove}
                    on_close={on_cancel_remove}
                    is_busy={*is_removing}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AddOverrideFormProps {
    on_saved: Callback<()>,
}

#[function_component]
fn AddOverrideForm(props: &AddOverrideFormProps) -> Html {
    let user_id_ref = use_node_ref();
    let role_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);
    let toast = use_toast();

    let on_submit = {
        let user_id_ref = user_id_ref.clone();
        let role_ref = role_ref.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let toast = toast.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let user_id_input = user_id_ref.cast::<HtmlInputElement>().unwrap();
            let role_select = role_ref.cast::<HtmlSelectElement>().unwrap();

            let raw_id = user_id_input.value();
            let Ok(user_id) = raw_id.trim().parse::<UserId>() else {
                error_message.set(Some(
                    "Enter the account's UUID, e.g. \
                     6ba7b810-9dad-11d1-80b4-00c04fd430c8"
                        .to_string(),
                ));
                return;
            };
            let Ok(role) = role_select.value().parse::<Role>() else {
                return;
            };

            error_message.set(None);
            is_saving.set(true);

            let is_saving = is_saving.clone();
            let toast = toast.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let client = get_table_client();
                let upsert = RoleUpsert { user_id, role };
                match client.upsert("user_roles", "user_id", &upsert).await {
                    Ok(()) => {
                        toast.success(
                            "Override added",
                            format!("{} is now {}", user_id, role),
                        );
                        user_id_input.set_value("");
                        on_saved.emit(());
                    }
                    Err(e) => {
                        toast.error("Override failed", e.to_string());
                    }
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg border border-neutral-200 dark:border-neutral-700">
            <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                {"Add override"}
            </h2>

            <form onsubmit={on_submit} class="flex gap-3 items-start flex-wrap">
                <div class="grow min-w-64">
                    <input
                        ref={user_id_ref}
                        type="text"
                        placeholder="Account UUID"
                        disabled={*is_saving}
                        class="w-full px-3 py-2 font-mono text-sm border border-neutral-300 \
                               dark:border-neutral-600 rounded-md shadow-sm \
                               bg-white dark:bg-neutral-700 \
                               text-neutral-900 dark:text-neutral-100 \
                               focus:outline-none focus:ring-2 focus:ring-neutral-500 \
                               disabled:opacity-50"
                    />
                    if let Some(error) = &*error_message {
                        <p class="text-sm text-red-700 dark:text-red-400 mt-2">{error}</p>
                    }
                </div>
                <select
                    ref={role_ref}
                    disabled={*is_saving}
                    class="px-3 py-2 text-sm border border-neutral-300 \
                           dark:border-neutral-600 rounded-md \
                           bg-white dark:bg-neutral-700 \
                           text-neutral-900 dark:text-neutral-100 \
                           disabled:opacity-50"
                >
                    {for Role::ALL.iter().map(|role| {
                        html! {
                            <option
                                value={role.to_string()}
                                selected={*role == Role::Editor}
                            >
                                {role.to_string()}
                            </option>
                        }
                    })}
                </select>
                <button
                    type="submit"
                    disabled={*is_saving}
                    class="px-4 py-2 rounded-md text-sm font-medium text-white \
                           bg-neutral-900 hover:bg-neutral-800 \
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if *is_saving { "Adding..." } else { "Add" }}
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RoleBadgeProps {
    role: Role,
}

#[function_component]
fn RoleBadge(props: &RoleBadgeProps) -> Html {
    let (text, classes) = match props.role {
        Role::Admin => (
            "Admin",
            "bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900",
        ),
        Role::Editor => (
            "Editor",
            "bg-neutral-500 text-white dark:bg-neutral-400 dark:text-neutral-900",
        ),
        Role::User => (
            "User",
            "bg-neutral-200 text-neutral-800 dark:bg-neutral-600 dark:text-neutral-200",
        ),
    };

    html! {
        <span class={format!("px-2 py-1 text-xs font-medium rounded-full shrink-0 {}", classes)}>
            {text}
        </span>
    }
}
