use crate::domain::money::format_money;
use crate::domain::stats::{payment_history, DailyRevenue, OverviewStats, RoomView};
use crate::domain::RoomStatus;
use crate::templates::components::{payment_badge, room_card};
use crate::templates::desktop_layout;
use crate::templates::layouts::desktop::Nav;
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct DashboardVm {
    pub date: NaiveDate,
    pub today: NaiveDate,
    pub rooms: Vec<RoomView>,
    pub notice: Option<String>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let stats = OverviewStats::from_views(&vm.rooms);

    desktop_layout(
        "Dashboard",
        Nav::Dashboard,
        vm.notice.as_deref(),
        html! {
            main class="container" {
                h1 { "Dashboard" }

                form class="date-picker" action="/dashboard" method="get" {
                    label for="date" { "Viewing " }
                    input type="date" id="date" name="date" value=(vm.date.to_string());
                    button type="submit" { "Go" }
                    @if vm.date != vm.today {
                        a href="/dashboard" { "Today" }
                    }
                }

                (overview_cards(&stats))

                section class="room-grid" {
                    @for view in &vm.rooms {
                        (room_card(view, vm.date))
                    }
                }

                div class="columns" {
                    (daily_overview(vm))
                    (daily_revenue(&vm.rooms))
                }
            }
        },
    )
}

fn overview_cards(stats: &OverviewStats) -> Markup {
    let cards = [
        ("Total Rooms", stats.total, "stat-total"),
        ("Rooms Available", stats.available, "stat-available"),
        ("Rooms Booked", stats.booked, "stat-booked"),
        ("Rooms Occupied", stats.occupied, "stat-occupied"),
    ];

    html! {
        section class="overview" {
            @for (title, value, class) in cards {
                div class=(format!("card stat {class}")) {
                    h4 { (title) }
                    p class="stat-value" { (value) }
                }
            }
        }
    }
}

fn rooms_with(rooms: &[RoomView], status: RoomStatus) -> Vec<&RoomView> {
    rooms.iter().filter(|v| v.status == status).collect()
}

fn daily_overview(vm: &DashboardVm) -> Markup {
    let occupied = rooms_with(&vm.rooms, RoomStatus::Occupied);
    let booked = rooms_with(&vm.rooms, RoomStatus::Booked);
    let available = rooms_with(&vm.rooms, RoomStatus::Available);
    let history = payment_history(&vm.rooms);

    html! {
        section class="card" id="daily-overview" {
            h3 { "Daily Overview" }
            p class="muted" { "Room status and payments for the selected date." }

            details open {
                summary { "Occupied (" (occupied.len()) ")" }
                @if occupied.is_empty() {
                    p class="muted" { "No occupied rooms." }
                } @else {
                    ul { @for v in &occupied { li { (v.room.name) } } }
                }
            }
            details open {
                summary { "Booked (" (booked.len()) ")" }
                @if booked.is_empty() {
                    p class="muted" { "No booked rooms." }
                } @else {
                    ul {
                        @for v in &booked {
                            li {
                                span { (v.room.name) }
                                @if let Some(b) = &v.room.booking {
                                    span class="muted" { " In: " (b.check_in.format("%b %-d").to_string()) }
                                }
                            }
                        }
                    }
                }
            }
            details {
                summary { "Available (" (available.len()) ")" }
                ul { @for v in &available { li { (v.room.name) } } }
            }
            details open {
                summary { "Payment History" }
                @if history.is_empty() {
                    p class="muted" { "No payments for this date." }
                } @else {
                    ul class="payments" {
                        @for v in &history {
                            @if let Some(p) = &v.room.payment {
                                li {
                                    span { (p.guest_name) }
                                    span class="muted" { " · " (v.room.name) " · " }
                                    strong { (format_money(p.amount)) }
                                    @if p.pending > 0 {
                                        span class="muted" { " (Pending: " (format_money(p.pending)) ")" }
                                    } @else {
                                        span class="muted" { " (Paid)" }
                                    }
                                    " " (payment_badge(p.status))
                                    form class="inline" action=(format!("/rooms/{}/cancel?date={}", v.room.id, vm.date)) method="post"
                                        onsubmit="return confirm('Cancel this booking?');" {
                                        button type="submit" class="link danger" { "Cancel booking" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn daily_revenue(rooms: &[RoomView]) -> Markup {
    let revenue = DailyRevenue::from_views(rooms);
    let occupied = rooms_with(rooms, RoomStatus::Occupied);

    html! {
        section class="card" id="daily-revenue" {
            h3 { "Daily Revenue" }
            p class="muted" { "Revenue and payment breakdown for the selected date." }
            div class="revenue" {
                div {
                    h4 { "Collected" }
                    p class="stat-value" { (format_money(revenue.collected)) }
                }
                div {
                    h4 { "Booked value" }
                    p class="stat-value" { (format_money(revenue.booked_value)) }
                }
            }
            @if occupied.is_empty() {
                p class="muted" { "No occupied rooms on this date." }
            } @else {
                ul {
                    @for v in &occupied {
                        @if let Some(p) = &v.room.payment {
                            li {
                                (v.room.name) ": " (format_money(p.amount))
                                @if p.pending > 0 {
                                    " (Pending: " (format_money(p.pending)) ")"
                                } @else {
                                    " (Paid)"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
