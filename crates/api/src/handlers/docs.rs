use std::path::{Component, Path, PathBuf};

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{
    error::{ApiError, ApiResult},
    routes::AppState,
};

/// 读取文档图片目录下的文件，内容类型按扩展名推断
pub async fn serve_image(state: &AppState, relative: &str) -> ApiResult<Response> {
    let root = Path::new(&state.config.docs.images_dir);
    let path = resolve_image_path(root, relative).ok_or(ApiError::ImageNotFound)?;

    match tokio::fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => {}
        _ => {
            debug!("文档图片不存在: {}", path.display());
            return Err(ApiError::ImageNotFound);
        }
    }

    let bytes = tokio::fs::read(&path).await?;
    let content_type = mime_guess::from_path(&path).first_or_octet_stream();
    let cache_control = format!(
        "public, max-age={}",
        state.config.docs.cache_max_age_seconds
    );

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CACHE_CONTROL, cache_control),
        ],
        bytes,
    )
        .into_response())
}

/// 把路径段拼到图片目录下；空段、`.`、`..` 和绝对路径都不解析
fn resolve_image_path(root: &Path, relative: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();

    for segment in relative.split('/') {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if !segment.contains('\\') => path.push(name),
            _ => return None,
        }
    }

    Some(path)
}
