//! Pieces shared by the market-data pages

pub mod ranking_detail;

pub use ranking_detail::RankingDetail;

/// Query inputs of the three financial statements
pub const REPORT_QUERY: &[&str] = &[
    "stock_code",
    "stock_name",
    "year",
    "quarter",
    "report_type",
    "report_date",
];

/// Query inputs of the ranking lists
pub const RANKING_QUERY: &[&str] = &["period", "stock_code", "stock_name", "industry"];

/// `{list}/detail/{code}?period={period}`
pub fn ranking_detail_href(list_path: &str, stock_code: &str, period: &str) -> String {
    format!(
        "{}/detail/{}?period={}",
        list_path,
        urlencoding::encode(stock_code),
        urlencoding::encode(period)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_href_encodes_parts() {
        assert_eq!(
            ranking_detail_href("/ranking/cash", "600000", "2023"),
            "/ranking/cash/detail/600000?period=2023"
        );
        assert_eq!(
            ranking_detail_href("/ranking/multiple-factor", "000001", "2023 Q4"),
            "/ranking/multiple-factor/detail/000001?period=2023%20Q4"
        );
    }
}
