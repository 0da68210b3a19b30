use super::*;

fn member(pk: i64, username: &str, role: StaffRole) -> StaffMember {
    StaffMember { pk, username: username.to_owned(), role }
}

#[test]
fn staff_with_role_filters_and_sorts() {
    let staff = vec![
        member(1, "zoe@example.com", StaffRole::Kitchen),
        member(2, "amy@example.com", StaffRole::Wait),
        member(3, "bob@example.com", StaffRole::Kitchen),
    ];
    let kitchen = staff_with_role(&staff, StaffRole::Kitchen);
    assert_eq!(kitchen.iter().map(|m| m.pk).collect::<Vec<_>>(), vec![3, 1]);
    assert_eq!(staff_with_role(&staff, StaffRole::Manager), Vec::new());
}

#[test]
fn add_staff_route_uses_wire_role() {
    assert_eq!(add_staff_route(StaffRole::Kitchen), "/addstaff?role=Kitchen");
    assert_eq!(add_staff_route(StaffRole::Wait), "/addstaff?role=Wait");
}
