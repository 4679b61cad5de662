use super::*;

pub(crate) struct Exporter {
  base_url: String,
  output_path: PathBuf,
  sheet_name: String,
}

impl Exporter {
  const FONT: &str = "Times New Roman";

  const HEADERS: [&str; 3] = ["Title", "Link", "Votes"];

  const LINK_WIDTH: f64 = 90.0;

  const TITLE_WIDTH: f64 = 60.0;

  fn cell_format() -> Format {
    Format::new()
      .set_font_name(Self::FONT)
      .set_border(FormatBorder::Medium)
      .set_border_color(Color::Black)
      .set_align(FormatAlign::General)
      .set_align(FormatAlign::VerticalCenter)
      .set_text_wrap()
  }

  fn header_format() -> Format {
    Self::cell_format()
      .set_bold()
      .set_font_size(14)
      .set_font_color(Color::White)
      .set_background_color(Color::Black)
      .set_pattern(FormatPattern::Solid)
  }

  fn link_format() -> Format {
    Self::cell_format()
      .set_font_size(12)
      .set_font_color(Color::Blue)
      .set_italic()
      .set_underline(FormatUnderline::Single)
  }

  pub(crate) fn new(config: &Config) -> Self {
    Self {
      base_url: config.base_url.clone(),
      output_path: config.output_path.clone(),
      sheet_name: config.sheet_name.clone(),
    }
  }

  pub(crate) fn output_path(&self) -> &Path {
    &self.output_path
  }

  pub(crate) fn rows(&self, stories: &[Story]) -> Vec<ExportRow> {
    stories
      .iter()
      .map(|story| ExportRow::new(story, &self.base_url))
      .collect()
  }

  /// Writes the sheet, replacing any file already at the output path.
  pub(crate) fn save(&self, stories: &[Story]) -> Result {
    let mut workbook = self.workbook(stories)?;

    workbook.save(&self.output_path).map_err(|source| Error::Write {
      path: self.output_path.clone(),
      source,
    })?;

    info!(
      path = %self.output_path.display(),
      rows = stories.len(),
      "wrote spreadsheet"
    );

    Ok(())
  }

  fn text_format() -> Format {
    Self::cell_format().set_font_size(12)
  }

  pub(crate) fn workbook(&self, stories: &[Story]) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();

    worksheet.set_name(&self.sheet_name)?;
    worksheet.set_column_width(0, Self::TITLE_WIDTH)?;
    worksheet.set_column_width(1, Self::LINK_WIDTH)?;

    let header = Self::header_format();

    for (column, label) in (0..).zip(Self::HEADERS) {
      worksheet.write_string_with_format(0, column, label, &header)?;
    }

    let text = Self::text_format();
    let link = Self::link_format();

    for (index, row) in self.rows(stories).iter().enumerate() {
      let number = u32::try_from(index + 1)
        .context("too many stories for one worksheet")?;

      worksheet.write_string_with_format(number, 0, &row.title, &text)?;
      worksheet.write_formula_with_format(number, 1, row.formula(), &link)?;
      worksheet.write_number_with_format(number, 2, row.votes, &text)?;
    }

    Ok(workbook)
  }
}
