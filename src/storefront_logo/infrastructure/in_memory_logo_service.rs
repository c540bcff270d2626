use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use tokio::sync::RwLock;

use crate::domain::error::{DomainError, LogoServiceError};
use crate::domain::font::FontInfo;
use crate::domain::logo::{Logo, LogoType};
use crate::domain::logo_request::{LogoRequest, LogoResponse};
use crate::domain::logo_service_trait::LogoService;

#[derive(Default)]
struct LogoStore {
    current: Option<Logo>,
    // 新しい順
    history: VecDeque<Logo>,
    next_id: u64,
}

/// Process-local `LogoService`: keeps the active logo and a bounded history
/// in memory and serves a fixed font catalog.
pub struct InMemoryLogoService {
    store: RwLock<LogoStore>,
    fonts: Vec<FontInfo>,
    max_history: usize,
}

impl InMemoryLogoService {
    pub fn new(fonts: Vec<FontInfo>, max_history: usize) -> Self {
        Self {
            store: RwLock::new(LogoStore::default()),
            fonts,
            max_history,
        }
    }
}

#[async_trait]
impl LogoService for InMemoryLogoService {
    async fn current_logo(&self) -> Result<Logo, LogoServiceError> {
        self.store
            .read()
            .await
            .current
            .clone()
            .ok_or_else(|| LogoServiceError::NotFound("no logo has been configured".to_string()))
    }

    async fn update_logo(&self, request: &LogoRequest) -> Result<LogoResponse, LogoServiceError> {
        let logo_type: LogoType = request
            .logo_type
            .parse()
            .map_err(|e: DomainError| LogoServiceError::Rejected(e.to_string()))?;

        let mut store = self.store.write().await;
        store.next_id += 1;
        let logo = Logo {
            id: store.next_id,
            logo_type,
            text: request.text.clone(),
            image_url: request.image_url.clone(),
            width: request.width,
            height: request.height,
            font_family: request.font_family.clone(),
            font_size: request.font_size,
            font_weight: request.font_weight,
            color: request.color.clone(),
            layout: request.layout.clone(),
            active: true,
            updated_at: Utc::now(),
        };

        if let Some(mut previous) = store.current.replace(logo.clone()) {
            previous.active = false;
            store.history.push_front(previous);
            store.history.truncate(self.max_history);
        }

        tracing::info!(id = logo.id, logo_type = logo_type.as_str(), "Logo updated");
        Ok(LogoResponse::ok("logo updated", logo))
    }

    async fn available_fonts(&self) -> Result<Vec<FontInfo>, LogoServiceError> {
        Ok(self.fonts.clone())
    }

    async fn logo_history(&self) -> Result<Vec<Logo>, LogoServiceError> {
        Ok(self.store.read().await.history.iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_request(text: &str) -> LogoRequest {
        LogoRequest {
            logo_type: "text".to_string(),
            text: Some(text.to_string()),
            width: 100,
            height: 40,
            font_family: "Arial".to_string(),
            font_size: 20,
            font_weight: 400,
            color: "#007AFF".to_string(),
            layout: "left-right".to_string(),
            ..LogoRequest::default()
        }
    }

    #[tokio::test]
    async fn test_current_logo_not_found_before_first_update() {
        let service = InMemoryLogoService::new(Vec::new(), 5);
        assert!(matches!(
            service.current_logo().await,
            Err(LogoServiceError::NotFound(_))
        ));
        assert!(service.logo_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_current_and_records_history() {
        let service = InMemoryLogoService::new(Vec::new(), 5);

        let first = service.update_logo(&text_request("Shop")).await.unwrap();
        assert!(first.success);
        assert_eq!(first.message, "logo updated");
        service.update_logo(&text_request("Shop 2")).await.unwrap();

        let current = service.current_logo().await.unwrap();
        assert_eq!(current.text.as_deref(), Some("Shop 2"));
        assert!(current.active);
        assert_eq!(current.id, 2);

        let history = service.logo_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].text.as_deref(), Some("Shop"));
        assert!(!history[0].active);
    }

    #[tokio::test]
    async fn test_history_is_bounded_and_newest_first() {
        let service = InMemoryLogoService::new(Vec::new(), 2);
        for i in 1..=5 {
            service.update_logo(&text_request(&format!("v{}", i))).await.unwrap();
        }

        let texts: Vec<_> = service
            .logo_history()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|logo| logo.text)
            .collect();
        assert_eq!(texts, vec!["v4", "v3"]);
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_type() {
        let service = InMemoryLogoService::new(Vec::new(), 2);
        let request = LogoRequest {
            logo_type: "banner".to_string(),
            ..text_request("Shop")
        };
        assert!(matches!(
            service.update_logo(&request).await,
            Err(LogoServiceError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn test_available_fonts_returns_catalog() {
        let fonts = vec![FontInfo::new("Arial", "sans-serif", &[400, 700])];
        let service = InMemoryLogoService::new(fonts.clone(), 2);
        assert_eq!(service.available_fonts().await.unwrap(), fonts);
    }
}
