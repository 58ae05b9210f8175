//! Dashboard page and HTTP response.
//!
//! One static template with four substitution points:
//!
//! | Placeholder     | Value                                  |
//! |-----------------|----------------------------------------|
//! | `{{pump}}`      | `checked` when the pump is on          |
//! | `{{fan}}`       | `checked` when the fan is on           |
//! | `{{vent}}`      | `checked` when the vent is open        |
//! | `{{rgb_color}}` | stored `#RRGGBB` colour                |
//!
//! Sensor readings on the page are simulated by the embedded script; the
//! controller has no sensors.

use core::fmt::Write as _;

use crate::app::state::ActuatorState;

const PUMP_SLOT: &str = "{{pump}}";
const FAN_SLOT: &str = "{{fan}}";
const VENT_SLOT: &str = "{{vent}}";
const COLOR_SLOT: &str = "{{rgb_color}}";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Умная теплица</title>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0-beta3/css/all.min.css">
<style>
body { font-family: Arial, sans-serif; background-color: #2b19a4; color: #ffffff; margin: 0; padding: 0; }
.container { max-width: 1200px; margin: 0 auto; padding: 20px; display: flex; flex-wrap: wrap; justify-content: space-between; }
.block-tab { display: flex; flex-wrap: wrap; width: 100%; }
.block-thin-tab { background-color: rgb(29, 134, 146); border-radius: 8px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); margin: 10px; padding: 15px; width: calc(33.333% - 20px); box-sizing: border-box; }
.sensor-value { display: flex; align-items: center; justify-content: space-between; padding: 10px 0; }
.sensor-value i { font-size: 24px; margin-right: 10px; }
.sensor-value span { font-size: 18px; }
.slider-container, .switch-container, .color-container { margin-top: 10px; }
.switch input { display: none; }
.switch .slider { position: relative; display: inline-block; width: 60px; height: 34px; background-color: #ccc; border-radius: 34px; transition: background-color 0.3s; cursor: pointer; }
.switch .slider:before { content: ''; position: absolute; left: 4px; top: 4px; width: 26px; height: 26px; background-color: white; border-radius: 50%; transition: left 0.3s; }
.switch input:checked + .slider { background-color: #27ae60; }
.switch input:checked + .slider:before { left: 30px; }
.color-container input[type='color'] { border: none; padding: 0; width: 50px; height: 50px; cursor: pointer; }
.icon-normal { color: green; }
.icon-low { color: blue; }
.icon-high { color: red; }
.icon-low-humidity { color: yellow; }
.icon-high-humidity { color: cyan; }
.icon-low-light { color: yellow; }
.icon-high-light { color: orange; }
.icon-moderate-uv { color: yellow; }
.icon-high-uv { color: red; }
</style>
</head>
<body>
<div class="container">
<h1>Умная теплица</h1>
<div class="block-tab">
<div class="block-thin-tab">
<div class="sensor-value" id="temperature-sensor">
<i class="fas fa-temperature-low"></i>
<span id="tGH">0</span><span>°C</span>
</div>
</div>
<div class="block-thin-tab">
<div class="sensor-value" id="humidity-sensor">
<i class="fas fa-tint"></i>
<span id="humGH">0</span><span>%</span>
</div>
</div>
<div class="block-thin-tab">
<div class="sensor-value" id="light-sensor">
<i class="fas fa-sun"></i>
<span id="lightGH">0</span><span>lx</span>
</div>
<div class="slider-container">
<label for="light-level">Освещенность:</label>
<input type="range" id="light-level" min="0" max="100" value="50">
<span id="light-level-value">50%</span>
</div>
<div class="color-container">
<label for="colorGH">Выбрать цвет:</label>
<input type="color" id="colorGH" value="{{rgb_color}}">
</div>
</div>
<div class="block-thin-tab">
<div class="switch-container">
<label for="pump">Насос:</label>
<label class="switch">
<input type="checkbox" id="pump" {{pump}}>
<span class="slider round"></span>
</label>
</div>
</div>
<div class="block-thin-tab">
<div class="switch-container">
<label for="wind">Вентилятор:</label>
<label class="switch">
<input type="checkbox" id="wind" {{fan}}>
<span class="slider round"></span>
</label>
</div>
</div>
<div class="block-thin-tab">
<div class="switch-container">
<label for="window">Форточка:</label>
<label class="switch">
<input type="checkbox" id="window" {{vent}}>
<span class="slider round"></span>
</label>
</div>
</div>
</div>
</div>
<script>
const lightSlider = document.getElementById('light-level');
const lightValue = document.getElementById('light-level-value');
lightSlider.addEventListener('input', function() {
lightValue.textContent = `${this.value}%`;
});
const pumpSwitch = document.getElementById('pump');
pumpSwitch.addEventListener('change', function() {
console.log(`Насос: ${this.checked ? 'Вкл' : 'Выкл'}`);
fetch(`/pump/${this.checked ? 'on' : 'off'}`);
});
const windSwitch = document.getElementById('wind');
windSwitch.addEventListener('change', function() {
console.log(`Вентилятор: ${this.checked ? 'Вкл' : 'Выкл'}`);
fetch(`/wind/${this.checked ? 'on' : 'off'}`);
});
const windowSwitch = document.getElementById('window');
windowSwitch.addEventListener('change', function() {
console.log(`Форточка: ${this.checked ? 'Открыта' : 'Закрыта'}`);
fetch(`/window/${this.checked ? 'open' : 'close'}`);
});
const colorPicker = document.getElementById('colorGH');
colorPicker.addEventListener('input', function() {
console.log(`Выбранный цвет: ${this.value}`);
fetch(`/rgb/color/${encodeURIComponent(this.value)}`);
});
function updateSensorValues() {
const temperature = Math.floor(Math.random() * 50 - 10);
const humidity = Math.floor(Math.random() * 100);
const light = Math.floor(Math.random() * 1000);
document.getElementById('tGH').textContent = temperature;
document.getElementById('humGH').textContent = humidity;
document.getElementById('lightGH').textContent = light;
updateIconColor('temperature-sensor', [
{ condition: temperature < 10, className: 'icon-low' },
{ condition: temperature > 30, className: 'icon-high' },
{ condition: true, className: 'icon-normal' }]);
updateIconColor('humidity-sensor', [
{ condition: humidity < 30, className: 'icon-low-humidity' },
{ condition: humidity > 70, className: 'icon-high-humidity' },
{ condition: true, className: 'icon-normal' }]);
updateIconColor('light-sensor', [
{ condition: light < 200, className: 'icon-low-light' },
{ condition: light > 800, className: 'icon-high-light' },
{ condition: true, className: 'icon-normal' }]);
}
function updateIconColor(sensorId, conditions) {
const icon = document.getElementById(sensorId).querySelector('i');
icon.classList.remove('icon-normal', 'icon-low', 'icon-high', 'icon-low-humidity', 'icon-high-humidity', 'icon-low-light', 'icon-high-light', 'icon-moderate-uv', 'icon-high-uv');
const match = conditions.find(c => c.condition);
icon.classList.add(match ? match.className : 'icon-normal');
}
setInterval(updateSensorValues, 1000);
</script>
</body>
</html>
"#;

fn checked(on: bool) -> &'static str {
    if on { "checked" } else { "" }
}

/// Render the dashboard HTML for `state`.
pub fn render_page(state: &ActuatorState) -> String {
    TEMPLATE
        .replace(PUMP_SLOT, checked(state.pump_on))
        .replace(FAN_SLOT, checked(state.fan_on))
        .replace(VENT_SLOT, checked(state.vent_open))
        .replace(COLOR_SLOT, state.rgb_color.as_str())
}

/// Render the complete `200 OK` response: status line, headers, page.
pub fn render_response(state: &ActuatorState) -> String {
    let body = render_page(state);
    let mut response = String::with_capacity(body.len() + 128);
    // Writing into a String cannot fail.
    let _ = write!(
        response,
        "HTTP/1.1 200 OK\r\n\
         Content-Type: text/html; charset=utf-8\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n",
        body.len()
    );
    response.push_str(&body);
    response
}
