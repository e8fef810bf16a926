//! System users: role and status management.

use super::{ColumnSpec, FilterSpec, FormSpec, PageSpec};
use crate::error::FieldError;
use crate::fixtures;
use crate::form::{self, Form, FormField};
use crate::models::{UserAccount, ACTIVE_STATUSES, USER_ROLES};
use crate::store::InsertPolicy;
use crate::summary::{count_where, Stat, Tone};

pub fn spec() -> PageSpec<UserAccount> {
    PageSpec {
        slug: "users",
        title: "المستخدمون",
        id_prefix: "USR-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::users,
        haystack: |u| format!("{} {} {}", u.id, u.name, u.email),
        filters: vec![
            FilterSpec {
                all_label: "كل الأدوار",
                options: || USER_ROLES.iter().map(|s| s.to_string()).collect(),
                value: |u| u.role.clone(),
            },
            FilterSpec {
                all_label: "كل الحالات",
                options: || ACTIVE_STATUSES.iter().map(|s| s.to_string()).collect(),
                value: |u| u.status.clone(),
            },
        ],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |u| u.id.clone() },
            ColumnSpec { header: "الاسم", cell: |u| u.name.clone() },
            ColumnSpec { header: "البريد", cell: |u| u.email.clone() },
            ColumnSpec { header: "الدور", cell: |u| u.role.clone() },
            ColumnSpec { header: "الحالة", cell: |u| u.status.clone() },
            ColumnSpec { header: "آخر دخول", cell: |u| u.last_login.clone() },
        ],
        form: Some(FormSpec { blank, prefill, build }),
    }
}

fn stats(records: &[UserAccount]) -> Vec<Stat> {
    let active = count_where(records, |u| u.status == "نشط");
    let inactive = records.len() - active;
    let admins = count_where(records, |u| u.role == "مدير النظام");
    vec![
        Stat::new("عدد المستخدمين", records.len().to_string(), Tone::Neutral),
        Stat::new("نشطون", active.to_string(), Tone::Positive),
        Stat::new("غير نشطين", inactive.to_string(), Tone::Warning),
        Stat::new("مدراء النظام", admins.to_string(), Tone::Info),
    ]
}

fn blank() -> Form {
    Form::new(vec![
        FormField::text("name", "الاسم"),
        FormField::text("email", "البريد الإلكتروني"),
        FormField::selector("role", "الدور", USER_ROLES),
        FormField::selector("status", "الحالة", ACTIVE_STATUSES),
    ])
}

fn prefill(user: &UserAccount) -> Form {
    let mut form = blank();
    form.set_value("name", &user.name);
    form.set_value("email", &user.email);
    form.set_value("role", &user.role);
    form.set_value("status", &user.status);
    form
}

fn build(form: &Form, id: &str) -> std::result::Result<UserAccount, Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = form::gather(&mut errors, form::require(form, "name", "الاسم"));
    let email = form::gather(&mut errors, form::require(form, "email", "البريد الإلكتروني"));
    if let Some(email) = &email {
        if !email.contains('@') {
            errors.push(FieldError::new("البريد الإلكتروني", "بريد إلكتروني غير صالح"));
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(UserAccount {
        id: id.to_string(),
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        role: form.value("role").to_string(),
        status: form.value("status").to_string(),
        last_login: "-".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_must_contain_at_sign() {
        let mut form = blank();
        form.set_value("name", "مستخدم");
        form.set_value("email", "not-an-email");
        let errors = build(&form, "USR-005").unwrap_err();
        assert_eq!(errors[0].reason, "بريد إلكتروني غير صالح");
    }

    #[test]
    fn test_new_user_has_no_login_yet() {
        let mut form = blank();
        form.set_value("name", "مستخدم");
        form.set_value("email", "user@daftar.sa");
        let user = build(&form, "USR-005").unwrap();
        assert_eq!(user.last_login, "-");
        assert_eq!(user.role, "مدير النظام");
    }

    #[test]
    fn test_stats_partition_by_status() {
        let stats = stats(&fixtures::users());
        assert_eq!(stats[1].value, "3");
        assert_eq!(stats[2].value, "1");
        assert_eq!(stats[3].value, "1");
    }
}
