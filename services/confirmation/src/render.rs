//! HTML rendering for the confirmation page

use chrono::NaiveDate;

use crate::models::BookingConfirmation;

/// Escape a value for interpolation into HTML text
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format an ISO date long-form; unparseable input is shown as-is
fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Pluralized guest summary; children are omitted when there are none
fn format_guests(adults: i64, children: i64) -> String {
    let mut guests = format!("{} Adult{}", adults, if adults == 1 { "" } else { "s" });
    if children > 0 {
        guests.push_str(&format!(
            ", {} Child{}",
            children,
            if children == 1 { "" } else { "ren" }
        ));
    }
    guests
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        "                <div class=\"detail-row\">\n                    <span class=\"detail-label\">{}</span>\n                    <span class=\"detail-value\">{}</span>\n                </div>\n",
        label,
        escape_html(value)
    )
}

/// Render the confirmation page for a stored booking
pub fn confirmation_page(booking: &BookingConfirmation) -> String {
    let mut rows = String::new();
    rows.push_str(&detail_row("Guest Name:", &booking.user_name));
    rows.push_str(&detail_row("Email:", &booking.user_email));
    rows.push_str(&detail_row("Hotel:", &booking.hotel_name));

    if let Some(address) = booking
        .hotel_address
        .as_deref()
        .filter(|a| !a.trim().is_empty())
    {
        rows.push_str(&detail_row("Address:", address));
    }

    rows.push_str(&detail_row("Room Type:", &booking.room_type));

    if let Some(number) = booking
        .room_number
        .as_deref()
        .filter(|n| !n.trim().is_empty())
    {
        rows.push_str(&detail_row("Room Number:", number));
    }

    rows.push_str(&detail_row(
        "Check-in Date:",
        &format_date(&booking.check_in_date),
    ));
    rows.push_str(&detail_row(
        "Check-out Date:",
        &format_date(&booking.check_out_date),
    ));
    rows.push_str(&detail_row(
        "Number of Nights:",
        &booking.nights.to_string(),
    ));
    rows.push_str(&detail_row(
        "Guests:",
        &format_guests(booking.adults_count, booking.children_count),
    ));
    rows.push_str(&format!(
        "                <div class=\"detail-row\">\n                    <span class=\"detail-label\">Total Price:</span>\n                    <span class=\"detail-value total-price\">${}</span>\n                </div>\n",
        escape_html(&booking.total_price)
    ));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Booking Confirmation - Hotel Booking System</title>
    <link rel="stylesheet" href="/css/style.css" />
</head>
<body>
    <div class="confirmation-container">
        <div class="success-icon">&#10003;</div>

        <div class="confirmation-header">
            <h1>Thank You for Your Reservation!</h1>
            <p>Your booking has been confirmed successfully.</p>
        </div>

        <div class="booking-ref">
            Booking Reference: {reference}
        </div>

        <div class="booking-details">
{rows}        </div>

        <p class="confirmation-note">
            A confirmation email has been sent to <strong>{email}</strong>
        </p>

        <a href="/" class="btn-ok">OK</a>
    </div>
</body>
</html>
"#,
        reference = escape_html(&booking.booking_reference),
        rows = rows,
        email = escape_html(&booking.user_email),
    )
}

/// Render the page shown for an unknown booking reference
pub fn not_found_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Booking Not Found</title>
    <link rel="stylesheet" href="/css/style.css" />
</head>
<body>
    <div class="container">
        <h1>Booking Not Found</h1>
        <p>The booking reference you're looking for does not exist.</p>
        <button onclick="window.location.href='/'">Go to Homepage</button>
    </div>
</body>
</html>
"#
    .to_string()
}
