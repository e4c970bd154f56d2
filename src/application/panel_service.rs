// Panel service - Use case for turning a panel request into a render tree
use crate::application::collaborators::{GaugeArgs, GaugeRenderer, TemplateInterpolator};
use crate::application::gauge_compositor::GaugeCompositor;
use crate::domain::error::PanelError;
use crate::domain::panel::PanelRequest;
use crate::domain::render::{CellStyle, GaugeCell, NO_DATA_MESSAGE, PanelRender, PanelView};
use crate::domain::theme::Theme;
use std::sync::Arc;

#[derive(Clone)]
pub struct PanelService {
    compositor: GaugeCompositor,
    renderer: Arc<dyn GaugeRenderer>,
}

impl PanelService {
    pub fn new(compositor: GaugeCompositor, renderer: Arc<dyn GaugeRenderer>) -> Self {
        Self {
            compositor,
            renderer,
        }
    }

    pub fn render(
        &self,
        request: &PanelRequest,
        theme: &Theme,
        interpolator: &dyn TemplateInterpolator,
    ) -> Result<PanelView, PanelError> {
        let view = match self.compositor.compose(request, interpolator)? {
            PanelRender::Gauges(descriptors) => {
                let cells = descriptors
                    .into_iter()
                    .map(|descriptor| {
                        let gauge = self.renderer.render(GaugeArgs {
                            value: descriptor.value,
                            options: &request.options,
                            prefix: &descriptor.prefix,
                            suffix: &descriptor.suffix,
                            theme,
                            width: descriptor.width,
                            height: descriptor.height,
                        });

                        GaugeCell {
                            style: CellStyle::for_descriptor(&descriptor),
                            caption: descriptor.show_label.then(|| descriptor.label.clone()),
                            key: descriptor.key,
                            gauge,
                        }
                    })
                    .collect();

                PanelView::Gauges { cells }
            }
            PanelRender::Nothing => PanelView::Empty,
            PanelRender::NoData => PanelView::Message {
                text: NO_DATA_MESSAGE.to_string(),
            },
        };

        Ok(view)
    }
}
