//! Room card labels and Indian-locale price formatting

use crate::entities::RoomType;

/// Format an amount with Indian digit grouping (`12,34,567`).
///
/// Up to three fraction digits are kept, trailing zeros dropped.
pub fn format_inr(amount: f64) -> String {
    let milli = (amount.abs() * 1000.0).round() as u64;
    let whole = milli / 1000;
    let fraction = milli % 1000;

    let mut out = String::new();
    if amount < 0.0 && milli > 0 {
        out.push('-');
    }
    out.push_str(&group_indian(&whole.to_string()));
    if fraction > 0 {
        let digits = format!("{:03}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Last three digits form one group, every two digits before that another
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Plain number without a trailing `.0`
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// "Capacity: 1 Person" / "Capacity: 3 Persons"
pub fn capacity_label(room: &RoomType) -> Option<String> {
    room.capacity.map(|capacity| {
        let noun = if capacity == 1 { "Person" } else { "Persons" };
        format!("Capacity: {} {}", capacity, noun)
    })
}

/// "Area: 180 sq ft", hidden when the area is absent or zero
pub fn area_label(room: &RoomType) -> Option<String> {
    room.room_area
        .filter(|area| *area != 0.0)
        .map(|area| format!("Area: {} sq ft", format_number(area)))
}

pub fn ac_label(room: &RoomType) -> &'static str {
    if room.is_ac.unwrap_or(false) {
        "AC Available"
    } else {
        "Non-AC"
    }
}

/// "₹6,500" for the monthly price
pub fn price_label(room: &RoomType) -> Option<String> {
    room.monthly_price
        .map(|price| format!("\u{20b9}{}", format_inr(price)))
}
