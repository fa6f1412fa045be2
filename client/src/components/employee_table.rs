//! Directory table with role-gated row actions.

use leptos::prelude::*;

use crate::net::types::{Employee, format_salary};

/// One page of employees. Edit/Delete only render when `can_manage` is set;
/// everyone else sees a "View" badge.
#[component]
pub fn EmployeeTable(
    employees: Vec<Employee>,
    can_manage: bool,
    on_edit: Callback<i64>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    let rows = employees
        .into_iter()
        .map(|emp| {
            let id = emp.id;
            let name = emp.display_name();
            let salary = format_salary(emp.salary);
            let department = emp.department_label().to_owned();
            let email = emp.email.clone();
            let actions = if can_manage {
                view! {
                    <button class="btn-edit" on:click=move |_| on_edit.run(id)>
                        "Edit"
                    </button>
                    <button class="btn-delete" on:click=move |_| on_delete.run(emp.clone())>
                        "Delete"
                    </button>
                }
                    .into_any()
            } else {
                view! { <span class="role-badge">"View"</span> }.into_any()
            };

            view! {
                <tr>
                    <td>{id}</td>
                    <td>{name}</td>
                    <td>{email}</td>
                    <td>{salary}</td>
                    <td>{department}</td>
                    <td>{actions}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="employees-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Salary"</th>
                    <th>"Department"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
