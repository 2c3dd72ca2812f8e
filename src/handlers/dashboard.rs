use crate::db::rooms::rooms_for_roster;
use crate::domain::stats::resolve_rooms;
use crate::responses::{html_response, ResultResp};
use crate::router::Ctx;
use crate::templates::pages::{dashboard_page, DashboardVm};

/// Every roster room resolved once for the selected date (default today).
pub fn show(ctx: &Ctx) -> ResultResp {
    let app = ctx.app;
    let today = app.clock.today();
    let date = ctx.query.date("date").unwrap_or(today);

    let rooms = app
        .db
        .with_conn(|conn| rooms_for_roster(conn, app.hotel_id(), &app.config.roster))?;

    let vm = DashboardVm {
        date,
        today,
        rooms: resolve_rooms(rooms, date),
        notice: ctx.query.get("notice").map(str::to_string),
    };

    html_response(dashboard_page(&vm))
}
