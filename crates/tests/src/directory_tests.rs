use std::collections::HashSet;

use pretty_assertions::assert_eq;
use shared_types::{format_currency, Directory, FeeSummary, UserRole};

#[test]
fn seed_data_is_consistent() {
    Directory::seeded().check_integrity().unwrap();
}

#[test]
fn each_seed_code_selects_exactly_one_school() {
    let dir = Directory::seeded();
    for school in &dir.schools {
        let lower = school.code.to_lowercase();
        let matches: Vec<_> = dir.schools.iter().filter(|s| s.matches_code(&lower)).collect();
        assert_eq!(matches.len(), 1, "code {}", school.code);
    }
}

#[test]
fn townsville_head_counts() {
    let dir = Directory::seeded();
    let stats = dir.school_stats("s1");
    assert_eq!(stats.students, 3);
    assert_eq!(stats.teachers, 1);
    assert_eq!(stats.parents, 1);
    assert_eq!(stats.classes, 2);
}

#[test]
fn townsville_fee_totals() {
    let dir = Directory::seeded();
    let stats = dir.school_stats("s1");
    assert_eq!(stats.fees.collected, 3000);
    assert_eq!(stats.fees.outstanding, 1800);
    assert_eq!(format_currency(stats.fees.collected), "$3,000");
}

#[test]
fn elite_has_staff_but_no_students() {
    let dir = Directory::seeded();
    let stats = dir.school_stats("s2");
    assert_eq!(stats.students, 0);
    assert_eq!(stats.fees, FeeSummary::default());
    assert_eq!(stats.attendance_rate, None);
}

#[test]
fn parent_sees_only_linked_children() {
    let dir = Directory::seeded();
    let parent = dir.user("u4").unwrap();
    let children: Vec<&str> = dir.children_of(parent).iter().map(|c| c.id.as_str()).collect();
    assert_eq!(children, vec!["u3"]);
    assert!(dir
        .children_of(parent)
        .iter()
        .all(|c| c.role == UserRole::Student));
}

#[test]
fn roster_is_ordered_by_roll_number() {
    let dir = Directory::seeded();
    let rolls: Vec<Option<u32>> = dir.roster("c1").iter().map(|s| s.roll_no).collect();
    assert_eq!(rolls, vec![Some(12), Some(13), Some(14)]);
    assert!(dir.roster("c2").is_empty());
}

#[test]
fn johnnys_report_card() {
    let dir = Directory::seeded();
    let letters: Vec<(String, &str)> = dir
        .grades_for_student("u3")
        .iter()
        .map(|r| (r.subject.clone(), r.letter()))
        .collect();
    assert_eq!(letters.len(), 4);
    assert_eq!(letters[0], ("Mathematics".to_string(), "A-"));
    assert!(dir.gpa("u3").is_some_and(|g| (0.0..=4.0).contains(&g)));
}

#[test]
fn student_announcements_are_newest_first() {
    let dir = Directory::seeded();
    let titles: Vec<&str> = dir
        .announcements_for(UserRole::Student)
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(titles, vec!["School Closed Tomorrow", "Exam Schedule Released"]);
    assert!(dir.announcements_for(UserRole::Admin).is_empty());
}

#[test]
fn teacher_and_parent_are_each_others_contacts() {
    let dir = Directory::seeded();
    let of_parent: HashSet<&str> = dir.contacts_of("u4").iter().map(|u| u.id.as_str()).collect();
    let of_teacher: HashSet<&str> = dir.contacts_of("u2").iter().map(|u| u.id.as_str()).collect();
    assert_eq!(of_parent, HashSet::from(["u2"]));
    assert_eq!(of_teacher, HashSet::from(["u4"]));
    assert_eq!(dir.conversation("u2", "u4").len(), 2);
}
