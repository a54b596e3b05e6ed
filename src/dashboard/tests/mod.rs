mod alert_timer_test;
mod render_test;
mod teardown_test;
