use super::*;

#[test]
fn test_page_request_default() {
    let request = PageRequest::default();
    assert_eq!(request.page, 1);
    assert_eq!(request.per_page, 20);
    assert_eq!(request.offset(), 0);
}

#[test]
fn test_page_request_offset() {
    let request = PageRequest {
        page: 3,
        per_page: 10,
    };
    assert_eq!(request.offset(), 20);
    assert_eq!(request.limit(), 10);
}

#[test]
fn test_page_zero_is_treated_as_first() {
    let request = PageRequest {
        page: 0,
        per_page: 10,
    };
    assert_eq!(request.offset(), 0);
}

#[test]
fn test_paginate_slices_in_order() {
    let items: Vec<u32> = (1..=7).collect();
    let page = PageRequest {
        page: 2,
        per_page: 3,
    }
    .paginate(&items);
    assert_eq!(page.data, vec![4, 5, 6]);
    assert_eq!(page.meta.total, 7);
    assert_eq!(page.meta.total_pages, 3);
}

#[test]
fn test_page_response_empty() {
    let response: PageResponse<u32> = PageResponse::new(vec![], 1, 20, 0);
    assert_eq!(response.meta.total_pages, 1);
}
