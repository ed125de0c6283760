use eframe::egui;

/// Builder for drag values with automatic formatting
pub struct DragValueBuilder<'a, T> {
    value: &'a mut T,
    range: Option<std::ops::RangeInclusive<T>>,
    suffix: Option<String>,
    speed: Option<f32>,
}

impl<'a, T> DragValueBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T) -> Self {
        Self {
            value,
            range: None,
            suffix: None,
            speed: None,
        }
    }

    pub fn range(mut self, range: std::ops::RangeInclusive<T>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut drag = egui::DragValue::new(self.value);

        if let Some(range) = self.range {
            drag = drag.range(range);
        }

        if let Some(suffix) = self.suffix {
            drag = drag.suffix(suffix);
        }

        if let Some(speed) = self.speed {
            drag = drag.speed(speed);
        }

        ui.add(drag).changed()
    }
}

/// Labeled horizontal drag value with range and suffix
pub fn labeled_drag_clamped<T>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut T,
    range: std::ops::RangeInclusive<T>,
    suffix: &str,
) -> bool
where
    T: egui::emath::Numeric,
{
    ui.horizontal(|ui| {
        ui.label(label);
        DragValueBuilder::new(value)
            .range(range)
            .suffix(suffix)
            .speed(0.05)
            .show(ui)
    })
    .inner
}

/// Enum selector using ComboBox
pub fn enum_selector<T>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[(T, &str)],
) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);

        let current_text = options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, text)| *text)
            .unwrap_or("Unknown");

        egui::ComboBox::from_id_salt(id)
            .selected_text(current_text)
            .show_ui(ui, |ui| {
                for (option_value, option_text) in options {
                    if ui
                        .selectable_value(value, option_value.clone(), *option_text)
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
    });
    changed
}

/// Margin editor: the four page margins in centimeters.
pub struct MarginsEditor<'a> {
    top: &'a mut f32,
    right: &'a mut f32,
    bottom: &'a mut f32,
    left: &'a mut f32,
    max: f32,
}

impl<'a> MarginsEditor<'a> {
    pub fn new(
        top: &'a mut f32,
        right: &'a mut f32,
        bottom: &'a mut f32,
        left: &'a mut f32,
        max: f32,
    ) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            max,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        changed |= labeled_drag_clamped(ui, "Top:", self.top, 0.0..=self.max, " cm");
        changed |= labeled_drag_clamped(ui, "Right:", self.right, 0.0..=self.max, " cm");
        changed |= labeled_drag_clamped(ui, "Bottom:", self.bottom, 0.0..=self.max, " cm");
        changed |= labeled_drag_clamped(ui, "Left:", self.left, 0.0..=self.max, " cm");

        changed
    }
}
