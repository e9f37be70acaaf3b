use board::{BoardConfig, BoardError, ParkRequest, Snapshot, StatusUpdate};
use gloo_net::http::{Request, Response};

/// `GET /full_status`, decoded into a snapshot.
pub async fn fetch_snapshot(config: &BoardConfig) -> Result<Snapshot, BoardError> {
    let response = Request::get(&config.full_status_url())
        .send()
        .await
        .map_err(transport)?;
    ensure_success(&response)?;

    let body = response.binary().await.map_err(transport)?;
    Snapshot::decode(&body)
}

/// `POST /update_status`. The response body is ignored.
pub async fn post_status(config: &BoardConfig, update: &StatusUpdate) -> Result<(), BoardError> {
    let response = Request::post(&config.update_status_url())
        .json(update)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    ensure_success(&response)
}

/// `POST /park`. Only the HTTP status matters.
pub async fn post_park(config: &BoardConfig, request: &ParkRequest) -> Result<(), BoardError> {
    let response = Request::post(&config.park_url())
        .json(request)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    ensure_success(&response)
}

fn ensure_success(response: &Response) -> Result<(), BoardError> {
    if response.ok() {
        Ok(())
    } else {
        Err(BoardError::Status(response.status()))
    }
}

fn transport(err: gloo_net::Error) -> BoardError {
    BoardError::Transport(err.to_string())
}
