use std::fmt;
use std::sync::Arc;

use lms::{Operation, PlayerControl, PlayerId, Reply as CommandReply};
use warp::http::header::{HeaderValue, CONTENT_TYPE};
use warp::http::{StatusCode, Uri};
use warp::path::Tail;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

/// The two players the bridge can address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Touch,
    Radio,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Touch => f.write_str("touch"),
            Player::Radio => f.write_str("radio"),
        }
    }
}

/// Hardware addresses for each [`Player`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    pub touch: PlayerId,
    pub radio: PlayerId,
}

impl Players {
    pub fn address(&self, player: Player) -> &PlayerId {
        match player {
            Player::Touch => &self.touch,
            Player::Radio => &self.radio,
        }
    }
}

/// One GET endpoint under `/lms/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub player: Player,
    pub operation: Operation,
}

/// Play and pause only ever go to the Touch.
pub const ROUTES: &[Route] = &[
    Route { path: "play", player: Player::Touch, operation: Operation::Play },
    Route { path: "pause", player: Player::Touch, operation: Operation::Pause },
    Route { path: "touch/voldown", player: Player::Touch, operation: Operation::VolumeDown },
    Route { path: "touch/volup", player: Player::Touch, operation: Operation::VolumeUp },
    Route { path: "radio/voldown", player: Player::Radio, operation: Operation::VolumeDown },
    Route { path: "radio/volup", player: Player::Radio, operation: Operation::VolumeUp },
];

impl Route {
    /// Look up the route for a path relative to `/lms/`
    pub fn resolve(tail: &str) -> Option<Route> {
        ROUTES.iter().copied().find(|route| route.path == tail)
    }
}

/// Shared state handed to every request handler
pub struct BridgeContext {
    control: Arc<dyn PlayerControl>,
    players: Players,
}

impl BridgeContext {
    pub fn new(control: Arc<dyn PlayerControl>, players: Players) -> Self {
        Self { control, players }
    }

    pub fn players(&self) -> &Players {
        &self.players
    }
}

/// All bridge endpoints, wrapped in request logging
pub fn routes(
    ctx: Arc<BridgeContext>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let status = warp::get()
        .and(warp::path::end())
        .map(|| warp::reply::json(&serde_json::json!({ "message": "Hello World!" })));

    let with_ctx = warp::any().map(move || Arc::clone(&ctx));

    let commands = warp::get()
        .and(warp::path("lms"))
        .and(warp::path::tail())
        .and(with_ctx)
        .and_then(handle_command);

    status.or(commands).with(warp::log("bridge"))
}

/// Handler for `GET /lms/...`
async fn handle_command(tail: Tail, ctx: Arc<BridgeContext>) -> Result<Response, Rejection> {
    let route = match Route::resolve(tail.as_str()) {
        Some(route) => route,
        None => return redirect_trailing_slash(tail.as_str()),
    };

    let target = ctx.players.address(route.player).clone();
    let control = Arc::clone(&ctx.control);
    let operation = route.operation;

    // The media server client blocks until the server answers
    let outcome = tokio::task::spawn_blocking(move || control.send(&target, operation)).await;

    let response = match outcome {
        Ok(Ok(reply)) => relay(reply),
        Ok(Err(err)) => {
            log::error!("{} on {} failed: {}", operation, route.player, err);
            warp::reply::with_status(err.to_string(), StatusCode::BAD_GATEWAY).into_response()
        }
        Err(err) => {
            log::error!("{} on {} did not complete: {}", operation, route.player, err);
            warp::reply::with_status("command task failed", StatusCode::INTERNAL_SERVER_ERROR)
                .into_response()
        }
    };

    Ok(response)
}

/// `/lms/play/` moves permanently to `/lms/play`; anything else unknown is 404
fn redirect_trailing_slash(tail: &str) -> Result<Response, Rejection> {
    let trimmed = match tail.strip_suffix('/') {
        Some(trimmed) => trimmed,
        None => return Err(warp::reject::not_found()),
    };
    let route = Route::resolve(trimmed).ok_or_else(warp::reject::not_found)?;

    let location = Uri::try_from(format!("/lms/{}", route.path))
        .map_err(|_| warp::reject::not_found())?;
    Ok(warp::redirect::redirect(location).into_response())
}

/// Pass the server's status and body bytes through untouched
pub fn relay(reply: CommandReply) -> Response {
    let status = match StatusCode::from_u16(reply.status) {
        Ok(status) => status,
        Err(_) => {
            log::warn!("Media server sent unrepresentable status {}", reply.status);
            StatusCode::BAD_GATEWAY
        }
    };

    let mut response = Response::new(warp::hyper::Body::from(reply.body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    response
}
