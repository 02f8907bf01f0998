//! Demo records loaded into the [`Directory`] at startup.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::{
    Announcement, Assignment, AssignmentStatus, AttendanceRecord, AttendanceStatus, ClassSection,
    Directory, Exam, FeeInvoice, FeeStatus, Grade, Message, School, TimeTableEntry, TrendPoint,
    User, UserRole,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn avatar(n: u32) -> String {
    format!("https://picsum.photos/id/{n}/100/100")
}

fn school(id: &str, code: &str, name: &str, address: &str, color: &str, logo: u32) -> School {
    School {
        id: id.into(),
        code: code.into(),
        name: name.into(),
        address: address.into(),
        primary_color: color.into(),
        logo_url: Some(format!("https://picsum.photos/id/{logo}/200/200")),
    }
}

fn staff(id: &str, name: &str, email: &str, role: UserRole, school_id: &str, pic: u32) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        school_id: school_id.into(),
        avatar_url: avatar(pic),
        student_class_id: None,
        roll_no: None,
        children_ids: Vec::new(),
    }
}

fn student(id: &str, name: &str, email: &str, class_id: &str, roll_no: u32, pic: u32) -> User {
    User {
        student_class_id: Some(class_id.into()),
        roll_no: Some(roll_no),
        ..staff(id, name, email, UserRole::Student, "s1", pic)
    }
}

fn period(id: &str, day: &str, start: &str, end: &str, subject: &str, room: &str) -> TimeTableEntry {
    TimeTableEntry {
        id: id.into(),
        day: day.into(),
        start_time: start.into(),
        end_time: end.into(),
        subject: subject.into(),
        room: room.into(),
        class_id: "c1".into(),
    }
}

fn fee(id: &str, title: &str, amount: u32, due: NaiveDate, status: FeeStatus, student_id: &str) -> FeeInvoice {
    FeeInvoice {
        id: id.into(),
        title: title.into(),
        amount,
        due_date: due,
        status,
        student_id: student_id.into(),
    }
}

fn trend(points: &[(&str, u32)]) -> Vec<TrendPoint> {
    points
        .iter()
        .map(|(label, value)| TrendPoint {
            label: (*label).into(),
            value: *value,
        })
        .collect()
}

/// Five weeks of school days starting Monday 2 October 2023. Each student is
/// absent on the listed day offsets and late on the listed late offsets.
fn attendance_history() -> Vec<AttendanceRecord> {
    let school_days: Vec<NaiveDate> = (0..35)
        .map(|offset| date(2023, 10, 2) + Duration::days(offset))
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect();

    let pattern: [(&str, &[usize], &[usize]); 3] = [
        ("u3", &[9], &[3]),
        ("u99", &[4, 17], &[]),
        ("u98", &[1, 12, 20], &[7, 8]),
    ];

    let mut records = Vec::new();
    for (student_id, absent, late) in pattern {
        for (i, day) in school_days.iter().enumerate() {
            let status = if absent.contains(&i) {
                AttendanceStatus::Absent
            } else if late.contains(&i) {
                AttendanceStatus::Late
            } else {
                AttendanceStatus::Present
            };
            records.push(AttendanceRecord {
                id: format!("at-{student_id}-{i}"),
                student_id: student_id.into(),
                date: *day,
                status,
            });
        }
    }
    records
}

impl Directory {
    /// The demo data set: two schools, one family, one class roster.
    pub fn seeded() -> Self {
        let schools = vec![
            school(
                "s1",
                "TOWN01",
                "Townsville International",
                "123 Education Lane, Townsville",
                "indigo",
                1,
            ),
            school(
                "s2",
                "ELITE99",
                "Elite Private Academy",
                "456 Prestige Ave, Metropolis",
                "emerald",
                2,
            ),
        ];

        let users = vec![
            staff("u1", "Alice Admin", "admin@town.com", UserRole::Admin, "s1", 101),
            staff("u2", "Mr. Smith", "teacher@town.com", UserRole::Teacher, "s1", 102),
            student("u3", "Johnny Doe", "student@town.com", "c1", 12, 103),
            User {
                children_ids: vec!["u3".into()],
                ..staff("u4", "Jane Doe", "parent@town.com", UserRole::Parent, "s1", 104)
            },
            staff("u5", "Bob Principal", "admin@elite.com", UserRole::Admin, "s2", 105),
            student("u99", "Sarah Connor", "sarah@town.com", "c1", 13, 106),
            student("u98", "Kyle Reese", "kyle@town.com", "c1", 14, 107),
        ];

        let classes = vec![
            ClassSection {
                id: "c1".into(),
                name: "10-A".into(),
                grade_level: 10,
                school_id: "s1".into(),
            },
            ClassSection {
                id: "c2".into(),
                name: "10-B".into(),
                grade_level: 10,
                school_id: "s1".into(),
            },
        ];

        let assignments = vec![
            Assignment {
                id: "as1".into(),
                title: "Algebra Worksheet".into(),
                subject: "Math".into(),
                due_date: date(2023, 10, 30),
                class_id: "c1".into(),
                status: AssignmentStatus::Pending,
            },
            Assignment {
                id: "as2".into(),
                title: "History Essay".into(),
                subject: "History".into(),
                due_date: date(2023, 11, 2),
                class_id: "c1".into(),
                status: AssignmentStatus::Submitted,
            },
        ];

        let fees = vec![
            fee("f1", "Term 1 Tuition", 1500, date(2023, 9, 1), FeeStatus::Paid, "u3"),
            fee("f2", "Bus Fee", 300, date(2023, 11, 1), FeeStatus::Due, "u3"),
            fee("f3", "Term 1 Tuition", 1500, date(2023, 9, 1), FeeStatus::Paid, "u99"),
            fee("f4", "Term 1 Tuition", 1500, date(2023, 9, 1), FeeStatus::Overdue, "u98"),
        ];

        let timetable = vec![
            period("t1", "Monday", "09:00", "10:00", "Mathematics", "101"),
            period("t2", "Monday", "10:00", "11:00", "Physics", "Lab A"),
            period("t3", "Monday", "11:15", "12:15", "English", "101"),
            period("t4", "Tuesday", "09:00", "10:00", "History", "204"),
        ];

        let announcements = vec![
            Announcement {
                id: "a1".into(),
                title: "School Closed Tomorrow".into(),
                content: "Due to heavy rain forecast.".into(),
                date: date(2023, 10, 26),
                author: "Principal".into(),
                target_roles: vec![UserRole::Student, UserRole::Parent, UserRole::Teacher],
            },
            Announcement {
                id: "a2".into(),
                title: "Exam Schedule Released".into(),
                content: "Please check the exam tab.".into(),
                date: date(2023, 10, 25),
                author: "Admin".into(),
                target_roles: vec![UserRole::Student],
            },
        ];

        let subjects = ["Mathematics", "Physics", "English", "History"];
        let exams: Vec<Exam> = subjects
            .iter()
            .enumerate()
            .map(|(i, subject)| Exam {
                id: format!("e{}", i + 1),
                name: "Mid-Term".into(),
                subject: (*subject).into(),
                date: date(2023, 10, 16 + i as u32),
                total_marks: 100,
                class_id: "c1".into(),
            })
            .collect();

        let marks: [(&str, [u32; 4]); 3] = [
            ("u3", [92, 85, 88, 76]),
            ("u99", [81, 90, 79, 84]),
            ("u98", [68, 72, 91, 80]),
        ];
        let grades = marks
            .iter()
            .flat_map(|(student_id, scores)| {
                exams.iter().zip(scores).map(move |(exam, score)| Grade {
                    id: format!("g-{student_id}-{}", exam.id),
                    exam_id: exam.id.clone(),
                    student_id: (*student_id).into(),
                    marks_obtained: *score,
                })
            })
            .collect();

        let messages = vec![
            Message {
                id: "m1".into(),
                from_user_id: "u2".into(),
                to_user_id: "u4".into(),
                body: "Hello, I wanted to let you know Johnny is doing great in Math!".into(),
                sent_at: "10:00 AM".into(),
            },
            Message {
                id: "m2".into(),
                from_user_id: "u4".into(),
                to_user_id: "u2".into(),
                body: "Thank you Mr. Smith! We are very proud.".into(),
                sent_at: "10:05 AM".into(),
            },
        ];

        Directory {
            schools,
            users,
            classes,
            assignments,
            fees,
            timetable,
            announcements,
            exams,
            grades,
            attendance: attendance_history(),
            messages,
            attendance_trend: trend(&[
                ("Mon", 95),
                ("Tue", 93),
                ("Wed", 96),
                ("Thu", 88),
                ("Fri", 92),
            ]),
            fee_trend: trend(&[
                ("Jan", 4000),
                ("Feb", 3000),
                ("Mar", 2000),
                ("Apr", 2780),
                ("May", 1890),
                ("Jun", 2390),
            ]),
        }
    }
}
