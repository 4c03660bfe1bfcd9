//! Sorting and searching plain records by different comparators.

use std::cmp::Ordering;

use arrkit_core::{
    Comparator, Natural, binary_search, binary_search_by, binary_search_by_key, by_key, sort_by,
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct User {
    id: u32,
    login: &'static str,
}

fn user(id: u32, login: &'static str) -> User {
    User { id, login }
}

fn unsorted_users() -> Vec<User> {
    vec![
        user(3, "Yuri"),
        user(2, "User"),
        user(1, "Admin"),
        user(4, "Anna"),
        user(5, "Alex"),
    ]
}

fn by_login(a: &User, b: &User) -> Ordering {
    a.login.cmp(b.login)
}

#[test]
fn users_sorted_by_id() {
    let mut users = unsorted_users();
    sort_by(&mut users, &by_key(|u: &User| u.id));
    assert_eq!(
        users,
        vec![
            user(1, "Admin"),
            user(2, "User"),
            user(3, "Yuri"),
            user(4, "Anna"),
            user(5, "Alex"),
        ]
    );
}

#[test]
fn users_sorted_by_login() {
    let mut users = unsorted_users();
    sort_by(&mut users, &by_login);
    assert_eq!(
        users,
        vec![
            user(1, "Admin"),
            user(5, "Alex"),
            user(4, "Anna"),
            user(2, "User"),
            user(3, "Yuri"),
        ]
    );
}

#[test]
fn search_users_by_login_ignores_id() {
    let mut users = unsorted_users();
    sort_by(&mut users, &by_login);

    assert_eq!(binary_search_by(&users, &user(0, "Anna"), &by_login), 2);
    assert_eq!(binary_search_by(&users, &user(0, "User"), &by_login), 3);
    assert_eq!(binary_search_by(&users, &user(0, "DeletedUser"), &by_login), -4);
    assert_eq!(binary_search_by(&users, &user(0, "Aaron"), &by_login), -1);
}

#[test]
fn search_users_by_id_ignores_login() {
    let mut users = unsorted_users();
    sort_by(&mut users, &by_key(|u: &User| u.id));

    assert_eq!(binary_search_by_key(&users, &user(3, "Yuri"), |u| u.id), 2);
    assert_eq!(binary_search_by_key(&users, &user(4, "Vasya"), |u| u.id), 3);
    assert_eq!(binary_search_by_key(&users, &user(10, "DeletedUser"), |u| u.id), -6);
}

#[test]
fn natural_order_is_derived_ord() {
    let people = [
        user(1, "Vasya"),
        user(2, "Anna"),
        user(3, "Yuri"),
        user(4, "Aaron"),
    ];
    assert_eq!(binary_search(&people, &user(1, "Vasya")), 0);
    assert_eq!(binary_search(&people, &user(5, "DeletedUser")), -5);
    assert_eq!(binary_search(&["aa", "cfta", "lmn", "w"], &"cfta"), 1);
}

#[test]
fn comparator_objects_are_interchangeable() {
    let comparators: [&dyn Comparator<User>; 2] = [&Natural, &by_login];
    let probe = user(2, "Zed");
    for comparator in comparators {
        let mut users = unsorted_users();
        sort_by(&mut users, comparator);
        assert!(binary_search_by(&users, &probe, comparator) < 0);
        assert!(binary_search_by(&users, &user(2, "User"), comparator) >= 0);
    }
}
