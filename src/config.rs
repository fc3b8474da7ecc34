#[cfg(debug_assertions)]
pub fn contact_endpoint() -> &'static str {
    "http://localhost:3001/api/contact"  // Local collector when serving with trunk
}

#[cfg(not(debug_assertions))]
pub fn contact_endpoint() -> &'static str {
    "https://script.google.com/macros/s/AKfycbwwCdnOqqq1QXr98cSV3_EatxnfTJcx678n-XyxjLvsgYl84p4JF2b3-_VjmQRDp2M-9Q/exec"
}
