use yew::prelude::*;

pub const COPYRIGHT: &str = "© 2025 TicketHub. Iasmin Veronez.";

pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <h2>{"TicketHub"}</h2>
                    <p class="muted">{"Get tickets for the best concerts"}</p>
                </div>
                <div class="footer-links">
                    <div>
                        <h3>{"Contact"}</h3>
                        <ul>
                            <li>{"info@tickethub.example.com"}</li>
                            <li>{"1-800-TICKETS"}</li>
                        </ul>
                    </div>
                    <div>
                        <h3>{"Legal"}</h3>
                        <ul>
                            <li>{"Terms of Service"}</li>
                            <li>{"Privacy Policy"}</li>
                        </ul>
                    </div>
                </div>
            </div>
            <div class="footer-copyright">
                <p>{COPYRIGHT}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_credits_author() {
        assert!(COPYRIGHT.starts_with("© 2025 TicketHub."));
        assert!(COPYRIGHT.ends_with("Iasmin Veronez."));
    }
}
