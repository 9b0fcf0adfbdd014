/// # unwrap a storage result inside a route
/// on failure the error is logged under `$target` and the route answers with a 500.
/// the calling scope needs `log::error` and `rocket::http::Status`.
macro_rules! db_handle_get_error_http {
    ( $data:expr, $target:expr, $type_str:expr) => {
        match $data {
            Ok(value) => value,
            Err(error) => {
                error!(target:$target, "Error getting {}. (error: {})", $type_str, error);
                return Err(Status::InternalServerError);
            }
        }
    }
}

pub(crate) use db_handle_get_error_http;
