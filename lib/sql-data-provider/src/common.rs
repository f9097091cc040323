use lexdesk_core::model::common::{GetListResponse, ListPagination};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QuerySelect, Select};

pub(crate) fn calculate_pages_count(total_items_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }

    (total_items_count / page_size) + std::cmp::min(total_items_count % page_size, 1)
}

pub(crate) trait SelectWithPagination {
    /// Restricts the query to one page, pages are zero-based
    fn with_pagination(self, pagination: &ListPagination) -> Self;
}

impl<E: EntityTrait> SelectWithPagination for Select<E> {
    fn with_pagination(self, pagination: &ListPagination) -> Self {
        let page_size = u64::from(pagination.page_size);
        self.offset(u64::from(pagination.page) * page_size)
            .limit(page_size)
    }
}

/// Runs an already filtered and ordered query for one page together with its total count
pub(crate) async fn fetch_page<E, C>(
    query: Select<E>,
    pagination: &ListPagination,
    db: &C,
) -> Result<GetListResponse<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    C: ConnectionTrait,
{
    let total_items = query.clone().count(db).await?;
    let values = query.with_pagination(pagination).all(db).await?;

    Ok(GetListResponse {
        values,
        total_pages: calculate_pages_count(total_items, u64::from(pagination.page_size)),
        total_items,
    })
}

#[cfg(test)]
mod tests {
    use super::calculate_pages_count;

    #[test]
    fn test_calculate_pages_count() {
        assert_eq!(0, calculate_pages_count(1, 0));

        assert_eq!(1, calculate_pages_count(1, 1));
        assert_eq!(1, calculate_pages_count(1, 20));

        assert_eq!(5, calculate_pages_count(50, 10));
        assert_eq!(6, calculate_pages_count(51, 10));
        assert_eq!(6, calculate_pages_count(60, 10));
        assert_eq!(0, calculate_pages_count(0, 10));
    }
}
