// Test fixtures - reusable test data
// The board's demo day: nine cases across five rooms plus one unscheduled request

#![allow(dead_code)]

use chrono::NaiveDate;
use or_board::models::department::Department;
use or_board::models::drape::{DrapeSelection, DrapeType};
use or_board::models::surgery::Surgery;
use or_board::utils::time::ClockTime;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Mar 10 2025: the seeded board day
    pub fn board_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    pub fn next_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()
    }
}

pub fn hm(text: &str) -> ClockTime {
    text.parse().unwrap()
}

/// Case on the board day in a given room
pub fn case(patient: &str, room: Option<u32>, start: &str, end: &str) -> Surgery {
    let mut builder = Surgery::builder()
        .patient_name(patient)
        .procedure("Phẫu thuật")
        .date(dates::board_day())
        .times(hm(start), hm(end));
    if let Some(room) = room {
        builder = builder.room(room);
    }
    builder.build().unwrap()
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    patient: &str,
    age: u32,
    diagnosis: &str,
    procedure: &str,
    surgeon: &str,
    department: Department,
    times: (&str, &str),
    room: Option<u32>,
) -> Surgery {
    let mut builder = Surgery::builder()
        .patient_name(patient)
        .patient_age(age)
        .diagnosis(diagnosis)
        .procedure(procedure)
        .surgeon(surgeon)
        .department(department)
        .date(dates::board_day())
        .times(hm(times.0), hm(times.1));
    if let Some(room) = room {
        builder = builder.room(room);
    }
    builder.build().unwrap()
}

/// The demo board as drafts, in seed order
pub fn demo_day() -> Vec<Surgery> {
    use Department::*;

    let mut femur = seeded(
        "Nguyễn Văn A",
        45,
        "Gãy xương đùi",
        "Nẹp vít xương đùi",
        "BS. Tuấn",
        Orthopedics,
        ("08:00", "10:30"),
        Some(1),
    );
    femur.special_requirements = vec!["C-Arm".to_string()];
    femur.drape = Some(DrapeType::Major.into());

    let mut appendix = seeded(
        "Trần Thị B",
        60,
        "Viêm ruột thừa",
        "Cắt ruột thừa nội soi",
        "BS. Lan",
        General,
        ("09:00", "10:00"),
        Some(2),
    );
    appendix.drape = Some(DrapeType::Medium.into());

    let mut brain = seeded(
        "Lê Văn C",
        55,
        "U não",
        "Phẫu thuật u não",
        "BS. Hùng",
        Neuro,
        ("08:30", "13:00"),
        Some(3),
    );
    brain.special_requirements = vec!["Kính hiển vi".to_string()];
    brain.drape = Some(DrapeType::Major.into());

    let mut valve = seeded(
        "Phạm Thị D",
        72,
        "Hẹp van động mạch chủ",
        "Thay van động mạch chủ",
        "BS. Tuấn",
        Cardio,
        ("11:00", "15:00"),
        Some(1),
    );
    valve.special_requirements = vec!["Máy tuần hoàn ngoài cơ thể".to_string()];
    valve.drape = Some(DrapeType::Major.into());

    let mut kidney = seeded(
        "Vũ Văn E",
        30,
        "Sỏi thận",
        "Tán sỏi qua da",
        "BS. Minh",
        Urology,
        ("10:30", "12:00"),
        Some(2),
    );
    kidney.drape = Some(DrapeType::Fenestrated.into());

    let mut hernia = seeded(
        "Hồ Thị F",
        25,
        "Thoát vị bẹn",
        "Phẫu thuật thoát vị bẹn",
        "BS. Lan",
        General,
        ("14:00", "15:30"),
        Some(4),
    );
    hernia.drape = Some(DrapeType::Medium.into());

    let mut knee = seeded(
        "Đặng Văn G",
        68,
        "Thay khớp gối",
        "Thay toàn bộ khớp gối",
        "BS. An",
        Orthopedics,
        ("13:30", "16:00"),
        Some(5),
    );
    knee.drape = Some(DrapeType::Major.into());

    let mut thyroid = seeded(
        "Hoàng Thị H",
        50,
        "U tuyến giáp",
        "Cắt tuyến giáp",
        "BS. Dũng",
        General,
        ("16:00", "17:30"),
        Some(2),
    );
    thyroid.drape = Some(DrapeSelection::other("Săng cổ"));

    let mut request = seeded(
        "Nguyễn Văn K",
        42,
        "Yêu cầu mổ",
        "Chưa xác định",
        "BS. An",
        Orthopedics,
        ("00:00", "00:00"),
        None,
    );
    request.special_requirements = vec!["Cần xếp lịch".to_string()];

    vec![femur, appendix, brain, valve, kidney, hernia, knee, thyroid, request]
}
