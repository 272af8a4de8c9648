//! Request/response DTOs for the REST surface.

pub mod alert_dto;
pub mod common_dto;
pub mod event_dto;
pub mod moderation_dto;

pub use alert_dto::AlertToggleResponse;
pub use common_dto::{PaginationMeta, PaginationParams};
pub use event_dto::{
    EventDetailResponse, EventDto, EventListParams, EventListResponse, EventSummaryDto,
    HypePointDto, HypeSeriesResponse, SortParam,
};
pub use moderation_dto::{
    CrawlTriggerResponse, CreateEventRequest, ModerationListParams, ModerationListResponse,
    PendingCountResponse, UpdateStatusRequest,
};
