fn main() {
    covid_sidebar_web::run();
}
