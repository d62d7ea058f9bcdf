fn main() -> iced::Result {
    biblio_admin::run()
}
