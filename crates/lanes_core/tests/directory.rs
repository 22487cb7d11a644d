use lanes_core::{Assignee, AssigneeDirectory};

#[test]
fn built_in_directory_has_four_members() {
    let directory = AssigneeDirectory::new();

    let all = directory.all();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].name, "John Doe");
}

#[test]
fn lookup_by_id() {
    let directory = AssigneeDirectory::new();

    assert_eq!(directory.get(2).map(|a| a.name.as_str()), Some("Jane Smith"));
    assert!(directory.get(99).is_none());
}

#[test]
fn options_start_with_unassigned_then_every_member() {
    let directory = AssigneeDirectory::new();

    let options = directory.options();

    assert_eq!(options.len(), 5);
    assert_eq!(options[0].value, None);
    assert_eq!(options[0].label, "Unassigned");
    assert_eq!(options[1].value, Some(1));
    assert_eq!(options[4].label, "Alice Brown");
}

#[test]
fn custom_directory_is_supported() {
    let directory =
        AssigneeDirectory::with_assignees(vec![Assignee::new(7, "Solo Dev", "🧑‍🔧")]);

    assert_eq!(directory.all().len(), 1);
    assert_eq!(directory.get(7).map(|a| a.id), Some(7));
    assert_eq!(directory.options().len(), 2);
}
