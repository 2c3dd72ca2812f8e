use crate::domain::stats::RoomView;
use crate::domain::RoomStatus;
use crate::templates::components::status_badge;
use chrono::NaiveDate;
use maud::{html, Markup};

pub fn room_card(view: &RoomView, date: NaiveDate) -> Markup {
    let room = &view.room;
    let can_book = view.status == RoomStatus::Available;

    html! {
        section class="card room-card" id=(format!("room-{}", room.id)) {
            div class="room-card-header" {
                h3 { (room.name) }
                (status_badge(view.status))
            }
            div class="room-card-body" {
                @if view.status == RoomStatus::Available {
                    p class="muted" { "Ready for booking" }
                } @else if let Some(booking) = &room.booking {
                    p class="guest" { (booking.guest_name) }
                    p class="muted" {
                        (booking.check_in.format("%b %-d").to_string()) " – " (booking.check_out.format("%b %-d").to_string())
                    }
                }
            }
            div class="room-card-footer" {
                @if can_book {
                    a class="button" href=(format!("/rooms/{}/book?date={}", room.id, date)) { "Book Now" }
                } @else {
                    a class="button" href=(format!("/rooms/{}?date={}", room.id, date)) { "Manage" }
                }
            }
        }
    }
}
