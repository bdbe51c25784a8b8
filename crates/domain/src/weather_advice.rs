//! Canned advice for tomorrow's weather condition
//!
//! Labels are the AMap `dayweather` strings. Matching is exact, no
//! normalization is performed.

/// Returned for any label not in the table
pub const DEFAULT_ADVICE: &str =
    "明日天气温馨提示：亲爱的老婆，高德地图返回的内容不在代码范围内！";

/// Every condition label with a dedicated advice sentence
pub const KNOWN_CONDITIONS: [&str; 21] = [
    "晴", "晴朗", "多云", "阴", "小雨", "中雨", "大雨", "暴雨", "阵雨", "雷阵雨", "雨夹雪", "小雪",
    "中雪", "大雪", "暴雪", "雾", "雾霾", "霾", "沙尘暴", "强对流", "冰雹",
];

/// Look up the advice sentence for a weather condition label
///
/// Total: unknown labels yield [`DEFAULT_ADVICE`].
#[must_use]
pub fn advice_for(condition: &str) -> &'static str {
    match condition {
        "晴" | "晴朗" => {
            "明日天气温馨提示：亲爱的老婆，明天阳光明媚，适合户外活动，别忘了涂抹防晒霜哦！"
        },
        "多云" => "明日天气温馨提示：亲爱的老婆，明天天气多云，温度适宜，也要小心紫外线哦~",
        "阴" => "明日天气温馨提示：亲爱的老婆，明天天空有些阴沉，记得带把伞以防突然下雨。",
        "小雨" => "明日天气温馨提示：亲爱的老婆，明天有小雨，请带上雨具，注意保暖，小心路滑。",
        "中雨" => {
            "明日天气温馨提示：亲爱的老婆，明天中等强度的降雨可能会造成路面湿滑，请减速慢行，并保持安全距离。"
        },
        "大雨" => {
            "明日天气温馨提示：亲爱的老婆，明天有大雨，尽量减少外出，出行请注意安全，避免积水路段。"
        },
        "暴雨" => "明日天气温馨提示：亲爱的老婆，明天暴雨来袭，请留在室内，远离窗户，确保安全。",
        "阵雨" => {
            "明日天气温馨提示：亲爱的老婆，明天阵雨时有时无，请随身携带雨具，以免突然降雨。"
        },
        "雷阵雨" => {
            "明日天气温馨提示：亲爱的老婆，明天雷阵雨可能伴有雷电，请注意避雷，避免在树下躲雨。"
        },
        "雨夹雪" => {
            "明日天气温馨提示：亲爱的老婆，明天雨夹雪天气，路面可能湿滑，驾车出行请注意安全。"
        },
        "小雪" => {
            "明日天气温馨提示：亲爱的老婆，明天小雪天气，记得穿上保暖衣物，欣赏雪景的同时注意防寒。"
        },
        "中雪" => {
            "明日天气温馨提示：亲爱的老婆，明天中雪天气，道路可能会积雪，请穿戴防滑鞋具，谨慎出行。"
        },
        "大雪" => {
            "明日天气温馨提示：亲爱的老婆，明天有大雪，请尽量减少外出，若必须外出，请穿戴保暖并做好防滑措施。"
        },
        "暴雪" => {
            "明日天气温馨提示：亲爱的老婆，明天暴雪天气非常危险，请留在室内，确保家中有足够食物及生活用品。"
        },
        "雾" | "雾霾" => {
            "明日天气温馨提示：亲爱的老婆，明天雾天能见度低，请驾驶员开启雾灯，谨慎驾驶；雾霾天气，请佩戴口罩，减少户外活动。"
        },
        "霾" => {
            "明日天气温馨提示：亲爱的老婆，明天霾天气质污染严重，请尽量减少外出，外出时佩戴口罩。"
        },
        "沙尘暴" => {
            "明日天气温馨提示：亲爱的老婆，明天沙尘暴天气，请关闭门窗，尽量留在室内，外出请戴口罩和护目镜。"
        },
        "强对流" => {
            "明日天气温馨提示：亲爱的老婆，明天强对流天气可能导致突发性天气变化，请随时关注气象预警信息。"
        },
        "冰雹" => {
            "明日天气温馨提示：亲爱的老婆，预计明天会有冰雹，请保护好车辆，尽量避免外出，以免受伤。"
        },
        _ => DEFAULT_ADVICE,
    }
}
