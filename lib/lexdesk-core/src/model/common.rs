#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LockType {
    Update,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetListResponse<ResponseItem> {
    pub values: Vec<ResponseItem>,
    pub total_pages: u64,
    pub total_items: u64,
}

impl<T> GetListResponse<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> GetListResponse<U> {
        GetListResponse {
            values: self.values.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListPagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for ListPagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 20,
        }
    }
}
